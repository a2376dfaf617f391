use attune_core::models::Category;
use attune_recommend::LearningStats;
use serde::{Deserialize, Serialize};

/// Point-in-time health of a runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeStats {
    pub learning: LearningStats,
    pub recommendation_cache_hit_rate: f64,
    pub prediction_cache_hit_rate: f64,
    pub registered_resources: usize,
    pub queued_analytics_events: usize,
    pub active_degradations: usize,
    pub last_category: Option<Category>,
}
