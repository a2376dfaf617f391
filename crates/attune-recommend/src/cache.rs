//! Recommendation cache.
//!
//! Uses `moka::future::Cache` with an LRU-style capacity bound and no TTL.
//! Concurrent `get_or_compute` calls for the same key are coalesced by
//! moka's entry API, so the compute future runs once per key.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use attune_core::models::Recommendation;
use moka::future::Cache;

pub struct RecommendationCache {
    cache: Cache<String, Recommendation>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl RecommendationCache {
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached recommendation for `key`, or await `compute` and
    /// store its result. A malformed cached entry is dropped and recomputed.
    pub async fn get_or_compute<F>(&self, key: &str, compute: F) -> Recommendation
    where
        F: Future<Output = Recommendation>,
    {
        if let Some(existing) = self.cache.get(key).await {
            if !existing.is_well_formed() {
                tracing::warn!(cache_key = %key, "malformed cached recommendation, recomputing");
                self.cache.invalidate(key).await;
            }
        }

        let entry = self.cache.entry_by_ref(key).or_insert_with(compute).await;
        if entry.is_fresh() {
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            attune_observability::tracing_setup::events::recommendation_cache_hit(key);
        }
        entry.into_value()
    }

    /// Look up without computing.
    pub async fn get(&self, key: &str) -> Option<Recommendation> {
        self.cache.get(key).await
    }

    /// Overwrite the entry for `key`. Last writer wins.
    pub async fn refresh(&self, key: &str, recommendation: Recommendation) {
        self.cache.insert(key.to_string(), recommendation).await;
    }

    pub async fn invalidate(&self, key: &str) {
        self.cache.invalidate(key).await;
    }

    /// Drop every entry and reset the counters.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
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

    /// Number of live entries, after pending maintenance has run.
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
