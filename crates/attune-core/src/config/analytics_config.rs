use serde::{Deserialize, Serialize};

use super::defaults;

/// Analytics dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Emit events at all.
    pub enabled: bool,
    /// Events kept locally while the sink is unreachable; oldest dropped first.
    pub queue_capacity: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ANALYTICS_ENABLED,
            queue_capacity: defaults::DEFAULT_ANALYTICS_QUEUE_CAPACITY,
        }
    }
}
