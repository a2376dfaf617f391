use serde::{Deserialize, Serialize};

use super::defaults;

/// Loading scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Batch size for the critical tier (clamped to the hard concurrency ceiling).
    pub critical_batch_size: usize,
    /// Batch size for the high tier.
    pub high_batch_size: usize,
    /// Batch size for the medium and low tiers.
    pub idle_batch_size: usize,
    /// Delay before the high tier starts (ms).
    pub high_tier_delay_ms: u64,
    /// Pause between consecutive non-critical batches (ms).
    pub inter_batch_delay_ms: u64,
    /// Maximum wait for an idle signal before medium/low tiers start anyway (ms).
    pub idle_fallback_ms: u64,
    /// Cumulative byte budget for one scheduling cycle. `None` = unbounded.
    pub byte_budget: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            critical_batch_size: defaults::DEFAULT_CRITICAL_BATCH_SIZE,
            high_batch_size: defaults::DEFAULT_HIGH_BATCH_SIZE,
            idle_batch_size: defaults::DEFAULT_IDLE_BATCH_SIZE,
            high_tier_delay_ms: defaults::DEFAULT_HIGH_TIER_DELAY_MS,
            inter_batch_delay_ms: defaults::DEFAULT_INTER_BATCH_DELAY_MS,
            idle_fallback_ms: defaults::DEFAULT_IDLE_FALLBACK_MS,
            byte_budget: None,
        }
    }
}
