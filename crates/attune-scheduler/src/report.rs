use attune_core::models::Priority;
use tokio::time::Instant;

/// Scheduler lifecycle states, in the order they are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    BatchingCritical,
    BatchingHigh,
    IdleAware,
}

/// One dispatched batch.
#[derive(Debug, Clone)]
pub struct BatchRecord {
    pub tier: Priority,
    pub resource_ids: Vec<String>,
    pub started_at: Instant,
}

/// Outcome of one scheduling cycle.
#[derive(Debug, Clone, Default)]
pub struct ScheduleReport {
    pub batches: Vec<BatchRecord>,
    pub loaded: Vec<String>,
    /// `(resource id, error message)`.
    pub failed: Vec<(String, String)>,
    /// Unknown ids and predictions over the byte budget.
    pub skipped: Vec<String>,
    pub states: Vec<SchedulerState>,
}

impl ScheduleReport {
    pub fn batches_for(&self, tier: Priority) -> impl Iterator<Item = &BatchRecord> {
        self.batches.iter().filter(move |b| b.tier == tier)
    }

    /// Number of loads attempted (loaded + failed).
    pub fn attempted(&self) -> usize {
        self.loaded.len() + self.failed.len()
    }
}
