//! # attune-scheduler
//!
//! Loads consolidated predictions in priority tiers.
//!
//! | Tier | Start | Batch size | Between batches |
//! |------|-------|-----------|-----------------|
//! | Critical | immediately | ≤ 10 | none |
//! | High | after a short delay | 6 | inter-batch delay |
//! | Medium / Low | on idle signal or fallback timeout | 3 | inter-batch delay |
//!
//! Individual load failures are logged and dropped for the cycle; nothing
//! is retried.

pub mod report;
pub mod scheduler;

pub use report::{BatchRecord, ScheduleReport, SchedulerState};
pub use scheduler::LoadingScheduler;
