//! PredictionEngine: registry + strategies + consolidation + cache.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use attune_core::config::PredictionConfig;
use attune_core::errors::{AttuneError, AttuneResult};
use attune_core::models::{
    LoadingPrediction, PredictionContext, RegistrySnapshot, ResourceDescriptor,
    ResourceMetricsUpdate,
};
use attune_core::traits::{ILoadObserver, IPredictionStrategy};
use chrono::{DateTime, Utc};

use crate::cache::{prediction_key, PredictionCache};
use crate::consolidator::consolidate;
use crate::registry::ResourceRegistry;
use crate::strategies::StrategySet;

pub struct PredictionEngine {
    registry: ResourceRegistry,
    strategies: RwLock<StrategySet>,
    cache: PredictionCache,
}

impl PredictionEngine {
    pub fn new(config: &PredictionConfig) -> Self {
        Self {
            registry: ResourceRegistry::new(config),
            strategies: RwLock::new(StrategySet::with_defaults(config)),
            cache: PredictionCache::new(config.cache_capacity),
        }
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &PredictionCache {
        &self.cache
    }

    /// Consolidated predictions for `ctx`, memoized per context digest.
    pub fn predict(&self, ctx: &PredictionContext) -> AttuneResult<Vec<LoadingPrediction>> {
        let _span = attune_observability::prediction_span!(ctx.current_route, ctx.session_id).entered();
        let key = prediction_key(ctx);
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let snapshot = self.registry.snapshot()?;
        let raw = self.read_strategies()?.run(&snapshot, ctx);
        let consolidated = consolidate(raw);
        tracing::debug!(
            route = %ctx.current_route,
            predictions = consolidated.len(),
            "predictions consolidated"
        );
        self.cache.insert(key, consolidated.clone());
        Ok(consolidated)
    }

    /// Register a resource. A new id can show up in any cached list, so
    /// the whole cache is dropped; a re-registration only drops entries
    /// mentioning it.
    pub fn register_resource(&self, descriptor: ResourceDescriptor) -> AttuneResult<()> {
        let id = descriptor.id.clone();
        if self.registry.register(descriptor)? {
            self.cache.invalidate_all();
        } else {
            self.cache.invalidate_resource(&id);
        }
        Ok(())
    }

    /// Merge metrics into a resource. Returns `false` for an unknown id.
    pub fn update_metrics(
        &self,
        id: &str,
        update: &ResourceMetricsUpdate,
        now: DateTime<Utc>,
    ) -> AttuneResult<bool> {
        let updated = self.registry.update_metrics(id, update, now)?;
        if updated {
            self.cache.invalidate_resource(id);
        }
        Ok(updated)
    }

    pub fn record_navigation(&self, path: Vec<String>) -> AttuneResult<bool> {
        self.registry.record_navigation(path)
    }

    pub fn record_usage(&self, id: &str, at: DateTime<Utc>) -> AttuneResult<()> {
        self.registry.record_usage(id, at)
    }

    pub fn snapshot(&self) -> AttuneResult<RegistrySnapshot> {
        self.registry.snapshot()
    }

    pub fn enable_strategy(&self, name: &str) -> AttuneResult<bool> {
        let changed = self.write_strategies()?.enable(name);
        self.cache.invalidate_all();
        Ok(changed)
    }

    pub fn disable_strategy(&self, name: &str) -> AttuneResult<bool> {
        let changed = self.write_strategies()?.disable(name);
        self.cache.invalidate_all();
        Ok(changed)
    }

    /// Add a custom strategy (or replace one with the same name).
    pub fn register_strategy(&self, strategy: Box<dyn IPredictionStrategy>) -> AttuneResult<()> {
        self.write_strategies()?.register(strategy);
        self.cache.invalidate_all();
        Ok(())
    }

    pub fn strategy_names(&self) -> AttuneResult<Vec<&'static str>> {
        Ok(self.read_strategies()?.names())
    }

    /// Clear the registry, its history and every cached prediction.
    pub fn reset(&self) -> AttuneResult<()> {
        self.registry.reset()?;
        self.cache.invalidate_all();
        Ok(())
    }

    fn read_strategies(&self) -> AttuneResult<RwLockReadGuard<'_, StrategySet>> {
        self.strategies
            .read()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))
    }

    fn write_strategies(&self) -> AttuneResult<RwLockWriteGuard<'_, StrategySet>> {
        self.strategies
            .write()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))
    }
}

impl ILoadObserver for PredictionEngine {
    fn on_loaded(&self, resource_id: &str, elapsed_ms: f64) {
        let now = Utc::now();
        match self.registry.record_load_time(resource_id, elapsed_ms, now) {
            Ok(true) => {
                self.cache.invalidate_resource(resource_id);
            }
            Ok(false) => {}
            Err(e) => tracing::warn!(resource_id, error = %e, "failed to record load time"),
        }
    }
}
