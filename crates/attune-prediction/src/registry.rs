//! Resource Registry: append/update catalog of loadable units.
//!
//! Descriptors are never deleted except on full reset.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use attune_core::config::PredictionConfig;
use attune_core::errors::{AttuneError, AttuneResult};
use attune_core::models::{RegistrySnapshot, ResourceDescriptor, ResourceMetricsUpdate};
use chrono::{DateTime, Utc};

use crate::history::BehaviorHistory;

pub struct ResourceRegistry {
    resources: RwLock<BTreeMap<String, ResourceDescriptor>>,
    history: RwLock<BehaviorHistory>,
}

impl ResourceRegistry {
    pub fn new(config: &PredictionConfig) -> Self {
        Self {
            resources: RwLock::new(BTreeMap::new()),
            history: RwLock::new(BehaviorHistory::new(
                config.navigation_history_capacity,
                config.usage_history_capacity,
            )),
        }
    }

    /// Insert or replace a descriptor. Returns `true` if the id was new.
    /// Insert or replace `descriptor`, clamping its metrics into range.
    pub fn register(&self, mut descriptor: ResourceDescriptor) -> AttuneResult<bool> {
        descriptor.normalize();
        let mut resources = self.write_resources()?;
        Ok(resources.insert(descriptor.id.clone(), descriptor).is_none())
    }

    /// Merge a partial update. Returns `false` for an unknown id.
    pub fn update_metrics(
        &self,
        id: &str,
        update: &ResourceMetricsUpdate,
        now: DateTime<Utc>,
    ) -> AttuneResult<bool> {
        let mut resources = self.write_resources()?;
        match resources.get_mut(id) {
            Some(descriptor) => {
                update.apply_to(descriptor, now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fold a measured load time into the rolling average.
    pub fn record_load_time(&self, id: &str, elapsed_ms: f64, now: DateTime<Utc>) -> AttuneResult<bool> {
        if !elapsed_ms.is_finite() || elapsed_ms < 0.0 {
            return Ok(false);
        }
        let mut resources = self.write_resources()?;
        let Some(descriptor) = resources.get_mut(id) else {
            return Ok(false);
        };
        let previous = descriptor.last_load_time_ms;
        let averaged = if previous > 0.0 {
            (previous + elapsed_ms) / 2.0
        } else {
            elapsed_ms
        };
        ResourceMetricsUpdate {
            last_load_time_ms: Some(averaged),
            ..Default::default()
        }
        .apply_to(descriptor, now);
        Ok(true)
    }

    pub fn get(&self, id: &str) -> AttuneResult<Option<ResourceDescriptor>> {
        Ok(self.read_resources()?.get(id).cloned())
    }

    pub fn len(&self) -> AttuneResult<usize> {
        Ok(self.read_resources()?.len())
    }

    pub fn is_empty(&self) -> AttuneResult<bool> {
        Ok(self.read_resources()?.is_empty())
    }

    pub fn record_navigation(&self, path: Vec<String>) -> AttuneResult<bool> {
        Ok(self.write_history()?.record_navigation(path))
    }

    pub fn record_usage(&self, id: &str, at: DateTime<Utc>) -> AttuneResult<()> {
        self.write_history()?.record_usage(id, at);
        Ok(())
    }

    /// Immutable view for strategies. Resources are sorted by id.
    pub fn snapshot(&self) -> AttuneResult<RegistrySnapshot> {
        let resources: Vec<ResourceDescriptor> = self.read_resources()?.values().cloned().collect();
        let history = self
            .history
            .read()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))?;
        Ok(RegistrySnapshot {
            resources,
            navigation_paths: history.navigation_paths(),
            usage: history.usage(),
        })
    }

    /// Drop every descriptor and all history.
    pub fn reset(&self) -> AttuneResult<()> {
        self.write_resources()?.clear();
        self.write_history()?.clear();
        Ok(())
    }

    fn read_resources(&self) -> AttuneResult<RwLockReadGuard<'_, BTreeMap<String, ResourceDescriptor>>> {
        self.resources
            .read()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))
    }

    fn write_resources(&self) -> AttuneResult<RwLockWriteGuard<'_, BTreeMap<String, ResourceDescriptor>>> {
        self.resources
            .write()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))
    }

    fn write_history(&self) -> AttuneResult<RwLockWriteGuard<'_, BehaviorHistory>> {
        self.history
            .write()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ResourceRegistry {
        ResourceRegistry::new(&PredictionConfig::default())
    }

    #[test]
    fn register_then_update() {
        let registry = registry();
        assert!(registry.register(ResourceDescriptor::new("a", "A", "/home")).unwrap());
        assert!(!registry.register(ResourceDescriptor::new("a", "A2", "/home")).unwrap());
        assert_eq!(registry.get("a").unwrap().unwrap().name, "A2");

        let update = ResourceMetricsUpdate {
            criticality_score: Some(0.9),
            ..Default::default()
        };
        assert!(registry.update_metrics("a", &update, Utc::now()).unwrap());
        assert!(!registry.update_metrics("missing", &update, Utc::now()).unwrap());
        assert_eq!(registry.get("a").unwrap().unwrap().criticality_score, 0.9);
    }

    #[test]
    fn register_clamps_out_of_range_metrics() {
        let registry = registry();
        let mut descriptor = ResourceDescriptor::new("a", "A", "/home");
        descriptor.criticality_score = 7.5;
        descriptor.user_engagement = -3.0;
        descriptor.interaction_frequency = f64::NAN;
        registry.register(descriptor).unwrap();

        let stored = registry.get("a").unwrap().unwrap();
        assert_eq!(stored.criticality_score, 1.0);
        assert_eq!(stored.user_engagement, 0.0);
        assert_eq!(stored.interaction_frequency, 0.0);
    }

    #[test]
    fn load_time_is_a_rolling_average() {
        let registry = registry();
        registry.register(ResourceDescriptor::new("a", "A", "/home")).unwrap();
        registry.record_load_time("a", 100.0, Utc::now()).unwrap();
        registry.record_load_time("a", 50.0, Utc::now()).unwrap();
        assert_eq!(registry.get("a").unwrap().unwrap().last_load_time_ms, 75.0);
        assert!(!registry.record_load_time("a", f64::NAN, Utc::now()).unwrap());
    }

    #[test]
    fn snapshot_is_sorted_and_reset_clears() {
        let registry = registry();
        for id in ["c", "a", "b"] {
            registry.register(ResourceDescriptor::new(id, id, "/x")).unwrap();
        }
        registry
            .record_navigation(vec!["/x".into(), "/y".into()])
            .unwrap();
        let snapshot = registry.snapshot().unwrap();
        let ids: Vec<_> = snapshot.resources.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(snapshot.navigation_paths.len(), 1);

        registry.reset().unwrap();
        assert!(registry.is_empty().unwrap());
        assert!(registry.snapshot().unwrap().navigation_paths.is_empty());
    }
}
