//! Bounded behavior history feeding the navigation and temporal strategies.

use std::collections::VecDeque;

use attune_core::models::UsageObservation;
use chrono::{DateTime, Datelike, Timelike, Utc};

#[derive(Debug, Clone)]
pub struct BehaviorHistory {
    navigation_paths: VecDeque<Vec<String>>,
    usage: VecDeque<UsageObservation>,
    navigation_capacity: usize,
    usage_capacity: usize,
}

impl BehaviorHistory {
    pub fn new(navigation_capacity: usize, usage_capacity: usize) -> Self {
        Self {
            navigation_paths: VecDeque::new(),
            usage: VecDeque::new(),
            navigation_capacity: navigation_capacity.max(1),
            usage_capacity: usage_capacity.max(1),
        }
    }

    /// Record a route sequence. Paths shorter than two routes carry no
    /// transition and are ignored.
    pub fn record_navigation(&mut self, path: Vec<String>) -> bool {
        if path.len() < 2 {
            return false;
        }
        if self.navigation_paths.len() >= self.navigation_capacity {
            self.navigation_paths.pop_front();
        }
        self.navigation_paths.push_back(path);
        true
    }

    pub fn record_usage(&mut self, resource_id: &str, at: DateTime<Utc>) {
        if self.usage.len() >= self.usage_capacity {
            self.usage.pop_front();
        }
        self.usage.push_back(UsageObservation {
            resource_id: resource_id.to_string(),
            hour: at.hour(),
            weekday: at.weekday().number_from_monday(),
        });
    }

    pub fn navigation_paths(&self) -> Vec<Vec<String>> {
        self.navigation_paths.iter().cloned().collect()
    }

    pub fn usage(&self) -> Vec<UsageObservation> {
        self.usage.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.navigation_paths.clear();
        self.usage.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn navigation_is_bounded_and_ignores_trivial_paths() {
        let mut history = BehaviorHistory::new(2, 10);
        assert!(!history.record_navigation(vec!["/home".into()]));
        for i in 0..3 {
            history.record_navigation(vec!["/home".into(), format!("/p{i}")]);
        }
        let paths = history.navigation_paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0][1], "/p1");
    }

    #[test]
    fn usage_records_hour_and_iso_weekday() {
        let mut history = BehaviorHistory::new(10, 1);
        // Sunday
        let at = Utc.with_ymd_and_hms(2024, 3, 10, 20, 15, 0).unwrap();
        history.record_usage("a", at);
        history.record_usage("b", at);
        let usage = history.usage();
        assert_eq!(usage.len(), 1);
        assert_eq!(usage[0].resource_id, "b");
        assert_eq!(usage[0].hour, 20);
        assert_eq!(usage[0].weekday, 7);
    }
}
