use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation subsystem configuration (scoring cache + learning loop).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Upper bound on memoized recommendations.
    pub cache_capacity: u64,
    /// Number of learning records kept in the ring buffer.
    pub learning_buffer_capacity: usize,
    /// Model accuracy used before any feedback arrives.
    pub initial_accuracy: f64,
    /// Ceiling for model accuracy.
    pub max_accuracy: f64,
    /// Step size applied to `(mean satisfaction - 0.5)` on every feedback.
    pub learning_rate: f64,
    /// Whether feedback updates model accuracy at all.
    pub learning_enabled: bool,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            cache_capacity: defaults::DEFAULT_RECOMMENDATION_CACHE_CAPACITY,
            learning_buffer_capacity: defaults::DEFAULT_LEARNING_BUFFER_CAPACITY,
            initial_accuracy: defaults::DEFAULT_INITIAL_ACCURACY,
            max_accuracy: defaults::DEFAULT_MAX_ACCURACY,
            learning_rate: defaults::DEFAULT_LEARNING_RATE,
            learning_enabled: defaults::DEFAULT_LEARNING_ENABLED,
        }
    }
}
