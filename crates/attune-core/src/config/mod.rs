//! Engine configuration, loadable from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields the
//! defaults in [`defaults`] and partial documents override only what they name.

pub mod defaults;

mod analytics_config;
mod observability_config;
mod prediction_config;
mod recommendation_config;
mod scheduler_config;
mod storage_config;

pub use analytics_config::AnalyticsConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;
pub use recommendation_config::RecommendationConfig;
pub use scheduler_config::SchedulerConfig;
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AttuneError, AttuneResult};

/// Top-level configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttuneConfig {
    pub recommendation: RecommendationConfig,
    pub prediction: PredictionConfig,
    pub scheduler: SchedulerConfig,
    pub storage: StorageConfig,
    pub analytics: AnalyticsConfig,
    pub observability: ObservabilityConfig,
}

impl AttuneConfig {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml(input: &str) -> AttuneResult<Self> {
        toml::from_str(input).map_err(|e| AttuneError::ConfigError(e.to_string()))
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> AttuneResult<String> {
        toml::to_string(self).map_err(|e| AttuneError::ConfigError(e.to_string()))
    }
}
