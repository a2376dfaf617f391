use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NetworkTier;

/// Loading priority tier. Ordering is `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// A resource a strategy expects to be needed soon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingPrediction {
    pub resource_id: String,
    /// In [0, 1].
    pub probability: f64,
    pub estimated_time_to_load_ms: f64,
    pub priority: Priority,
    pub reason: String,
    pub contributing_factors: BTreeSet<String>,
}

/// Shared context every strategy reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionContext {
    pub current_route: String,
    pub previous_route: Option<String>,
    /// Hour of day (0-23).
    pub hour_of_day: u32,
    /// ISO weekday (Mon=1 .. Sun=7).
    pub day_of_week: u32,
    pub session_id: String,
    pub network: NetworkTier,
    /// Reference instant for recency calculations.
    pub now: DateTime<Utc>,
}

impl PredictionContext {
    /// Context for `route` at `now`, fast network, no previous route.
    pub fn at(route: impl Into<String>, session_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        use chrono::{Datelike, Timelike};
        Self {
            current_route: route.into(),
            previous_route: None,
            hour_of_day: now.hour(),
            day_of_week: now.weekday().number_from_monday(),
            session_id: session_id.into(),
            network: NetworkTier::Fast,
            now,
        }
    }
}
