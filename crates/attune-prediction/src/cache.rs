//! Consolidated prediction cache.
//!
//! Uses `moka::sync::Cache`, keyed by a digest of the prediction context.
//! A resource update invalidates only the entries that mention it.

use std::sync::atomic::{AtomicU64, Ordering};

use attune_core::models::{LoadingPrediction, PredictionContext};
use moka::sync::Cache;

pub struct PredictionCache {
    cache: Cache<String, Vec<LoadingPrediction>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// blake3 hex digest of `route|hour|weekday|sessionId`.
pub fn prediction_key(ctx: &PredictionContext) -> String {
    let material = format!(
        "{}|{}|{}|{}",
        ctx.current_route, ctx.hour_of_day, ctx.day_of_week, ctx.session_id
    );
    blake3::hash(material.as_bytes()).to_hex().to_string()
}

impl PredictionCache {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<LoadingPrediction>> {
        match self.cache.get(key) {
            Some(v) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(v)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, key: String, predictions: Vec<LoadingPrediction>) {
        self.cache.insert(key, predictions);
    }

    /// Invalidate every entry containing a prediction for `resource_id`.
    /// Returns the number of entries dropped.
    pub fn invalidate_resource(&self, resource_id: &str) -> usize {
        self.cache.run_pending_tasks();
        let keys: Vec<String> = self
            .cache
            .iter()
            .filter(|(_, predictions)| predictions.iter().any(|p| p.resource_id == resource_id))
            .map(|(k, _)| k.as_ref().clone())
            .collect();
        for key in &keys {
            self.cache.invalidate(key);
        }
        attune_observability::tracing_setup::events::prediction_cache_invalidated(resource_id, keys.len());
        keys.len()
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let m = self.misses() as f64;
        let total = h + m;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}
