//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// Log a freshly computed recommendation.
pub fn recommendation_computed(category: &str, confidence: f64, cache_key: &str) {
    tracing::info!(
        event = "recommendation_computed",
        category = %category,
        confidence = confidence,
        cache_key = %cache_key,
        "recommendation computed"
    );
}

/// Log a recommendation served from cache.
pub fn recommendation_cache_hit(cache_key: &str) {
    tracing::debug!(
        event = "recommendation_cache_hit",
        cache_key = %cache_key,
        "recommendation cache hit"
    );
}

/// Log a feedback event and the resulting accuracy.
pub fn feedback_recorded(session_id: &str, satisfaction: u8, model_accuracy: f64) {
    tracing::info!(
        event = "feedback_recorded",
        session_id = %session_id,
        satisfaction = satisfaction,
        model_accuracy = model_accuracy,
        "feedback recorded"
    );
}

/// Log targeted invalidation of cached predictions.
pub fn prediction_cache_invalidated(resource_id: &str, entries: usize) {
    tracing::debug!(
        event = "prediction_cache_invalidated",
        resource_id = %resource_id,
        entries = entries,
        "prediction cache invalidated"
    );
}

/// Log a failed resource load. The batch continues.
pub fn resource_load_failed(resource_id: &str, error: &str) {
    tracing::warn!(
        event = "resource_load_failed",
        resource_id = %resource_id,
        error = %error,
        "resource load failed"
    );
}

/// Log a dispatched loading batch.
pub fn batch_dispatched(tier: &str, size: usize) {
    tracing::debug!(
        event = "batch_dispatched",
        tier = %tier,
        size = size,
        "loading batch dispatched"
    );
}

/// Log an analytics event queued after a send failure.
pub fn analytics_queued(kind: &str, queue_len: usize) {
    tracing::warn!(
        event = "analytics_queued",
        kind = %kind,
        queue_len = queue_len,
        "analytics event queued for retry"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
