//! # attune-observability
//!
//! Structured JSON tracing with span definitions, event helpers for every
//! engine operation worth auditing, and degradation event tracking.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation, DEFAULT_LOG_CAPACITY};
