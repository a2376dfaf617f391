use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction subsystem configuration.
///
/// Strategy thresholds are heuristics, kept here so they can be tuned
/// without touching strategy code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Minimum transition probability for navigation predictions.
    pub navigation_threshold: f64,
    /// Minimum combined probability for interaction predictions.
    pub interaction_threshold: f64,
    /// Minimum co-occurrence probability for temporal predictions.
    pub temporal_threshold: f64,
    /// Criticality score above which a resource is always predicted.
    pub criticality_threshold: f64,
    /// Shared probability assigned to bundle members.
    pub bundle_probability: f64,
    /// Multiplier applied to the load estimate of bundled resources.
    pub bundle_discount: f64,
    /// Maximum resources considered for one bundle.
    pub max_bundle_size: usize,
    /// Upper bound on memoized consolidated prediction lists.
    pub cache_capacity: u64,
    /// Navigation paths retained for transition statistics.
    pub navigation_history_capacity: usize,
    /// Usage observations retained for temporal statistics.
    pub usage_history_capacity: usize,
    /// Strategy names that start disabled.
    pub disabled_strategies: Vec<String>,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            navigation_threshold: defaults::DEFAULT_NAVIGATION_THRESHOLD,
            interaction_threshold: defaults::DEFAULT_INTERACTION_THRESHOLD,
            temporal_threshold: defaults::DEFAULT_TEMPORAL_THRESHOLD,
            criticality_threshold: defaults::DEFAULT_CRITICALITY_THRESHOLD,
            bundle_probability: defaults::DEFAULT_BUNDLE_PROBABILITY,
            bundle_discount: defaults::DEFAULT_BUNDLE_DISCOUNT,
            max_bundle_size: defaults::DEFAULT_MAX_BUNDLE_SIZE,
            cache_capacity: defaults::DEFAULT_PREDICTION_CACHE_CAPACITY,
            navigation_history_capacity: defaults::DEFAULT_NAVIGATION_HISTORY_CAPACITY,
            usage_history_capacity: defaults::DEFAULT_USAGE_HISTORY_CAPACITY,
            disabled_strategies: Vec::new(),
        }
    }
}
