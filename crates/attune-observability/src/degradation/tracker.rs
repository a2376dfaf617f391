//! Degradation log: which component fell back to what, since when, and
//! whether it has come back.
//!
//! One active entry per component. Repeated failures while a component is
//! already degraded bump that entry instead of appending. The log is bounded;
//! recovered entries are evicted before active ones.

use std::collections::VecDeque;

use attune_core::models::DegradationEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entries retained by [`DegradationTracker::new`].
pub const DEFAULT_LOG_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    Active,
    Recovered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    /// The failure that opened this entry.
    pub event: DegradationEvent,
    /// Failures folded into this entry, the opening one included.
    pub occurrences: u32,
    pub last_failure: String,
    pub last_seen_at: DateTime<Utc>,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

impl TrackedDegradation {
    fn is_active_for(&self, component: &str) -> bool {
        self.recovery_status == RecoveryStatus::Active && self.event.component == component
    }
}

#[derive(Debug, Clone)]
pub struct DegradationTracker {
    entries: VecDeque<TrackedDegradation>,
    capacity: usize,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a failure. Returns `true` if it opened a new degradation,
    /// `false` if it was folded into the component's active one.
    pub fn record(&mut self, event: DegradationEvent) -> bool {
        if let Some(active) = self
            .entries
            .iter_mut()
            .find(|t| t.is_active_for(&event.component))
        {
            active.occurrences = active.occurrences.saturating_add(1);
            active.last_failure = event.failure;
            active.last_seen_at = event.timestamp;
            return false;
        }

        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        if self.entries.len() >= self.capacity {
            self.evict_one();
        }
        self.entries.push_back(TrackedDegradation {
            occurrences: 1,
            last_failure: event.failure.clone(),
            last_seen_at: event.timestamp,
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
        true
    }

    /// Close the active degradation of `component`. Returns `true` if one was open.
    pub fn mark_recovered(&mut self, component: &str) -> bool {
        match self.entries.iter_mut().find(|t| t.is_active_for(component)) {
            Some(tracked) => {
                tracked.recovery_status = RecoveryStatus::Recovered;
                tracked.recovered_at = Some(Utc::now());
                tracing::info!(component, occurrences = tracked.occurrences, "degradation recovered");
                true
            }
            None => false,
        }
    }

    /// Oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &TrackedDegradation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.entries
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.entries.iter().any(|t| t.is_active_for(component))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn evict_one(&mut self) {
        let victim = self
            .entries
            .iter()
            .position(|t| t.recovery_status == RecoveryStatus::Recovered)
            .unwrap_or(0);
        self.entries.remove(victim);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_failures_fold_into_one_entry() {
        let mut tracker = DegradationTracker::new();
        assert!(tracker.record(DegradationEvent::now("storage", "unavailable", "defaults")));
        assert!(!tracker.record(DegradationEvent::now("storage", "corrupt", "defaults")));
        assert!(tracker.record(DegradationEvent::now("analytics", "unreachable", "local_queue")));

        assert_eq!(tracker.len(), 2);
        let storage = tracker.entries().next().unwrap();
        assert_eq!(storage.occurrences, 2);
        assert_eq!(storage.event.failure, "unavailable");
        assert_eq!(storage.last_failure, "corrupt");
    }

    #[test]
    fn recovery_reopens_on_next_failure() {
        let mut tracker = DegradationTracker::new();
        tracker.record(DegradationEvent::now("storage", "unavailable", "defaults"));
        assert!(tracker.mark_recovered("storage"));
        assert!(!tracker.is_degraded("storage"));
        assert!(!tracker.mark_recovered("storage"));

        assert!(tracker.record(DegradationEvent::now("storage", "unavailable", "defaults")));
        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.active_degradations().len(), 1);
    }

    #[test]
    fn log_is_bounded_and_evicts_recovered_first() {
        let mut tracker = DegradationTracker::with_capacity(2);
        tracker.record(DegradationEvent::now("a", "x", "f"));
        tracker.record(DegradationEvent::now("b", "x", "f"));
        tracker.mark_recovered("b");
        tracker.record(DegradationEvent::now("c", "x", "f"));

        let components: Vec<_> = tracker.entries().map(|t| t.event.component.as_str()).collect();
        assert_eq!(components, vec!["a", "c"]);

        tracker.record(DegradationEvent::now("d", "x", "f"));
        let components: Vec<_> = tracker.entries().map(|t| t.event.component.as_str()).collect();
        assert_eq!(components, vec!["c", "d"]);
    }
}
