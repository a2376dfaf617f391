use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;

/// Concrete property set for a profile, split by when it must be applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adaptations {
    /// Applied synchronously, before the next paint.
    pub critical: BTreeMap<String, String>,
    /// Applied lazily.
    pub deferred: BTreeMap<String, String>,
}

impl Adaptations {
    /// Look a property up in either partition (critical first).
    pub fn get(&self, property: &str) -> Option<&str> {
        self.critical
            .get(property)
            .or_else(|| self.deferred.get(property))
            .map(String::as_str)
    }

    /// Iterate over every property in both partitions.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.critical.iter().chain(self.deferred.iter())
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.deferred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.deferred.is_empty()
    }
}

/// A scored, fully expanded profile choice.
///
/// Recommendations are immutable: a forced re-analysis produces a new one
/// that supersedes the cached entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub category: Category,
    /// In [0, 1]. Zero means nothing matched and the default profile was used.
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub adaptations: Adaptations,
    pub accessibility_overrides: BTreeMap<String, String>,
    pub estimated_apply_cost_ms: f64,
    pub created_at: DateTime<Utc>,
}

impl Recommendation {
    /// Zero-confidence recommendations should be treated as low trust.
    pub fn is_low_trust(&self) -> bool {
        self.confidence <= 0.0
    }

    /// Structural sanity check applied to cached entries.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
            && self.confidence.is_finite()
            && (0.0..=1.0).contains(&self.confidence)
            && self.estimated_apply_cost_ms.is_finite()
            && self.estimated_apply_cost_ms >= 0.0
    }
}
