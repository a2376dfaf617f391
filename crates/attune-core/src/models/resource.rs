use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A loadable unit tracked by the resource registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub id: String,
    pub name: String,
    /// Route this resource belongs to (e.g. `/marketplace/detail`).
    pub route_affinity: String,
    pub last_load_time_ms: f64,
    pub last_render_time_ms: f64,
    /// Interactions observed, unnormalized.
    pub interaction_frequency: f64,
    /// In [0, 1].
    pub user_engagement: f64,
    /// In [0, 1].
    pub criticality_score: f64,
    pub last_accessed_at: DateTime<Utc>,
    pub size_bytes: u64,
    pub dependencies: BTreeSet<String>,
}

impl ResourceDescriptor {
    /// A descriptor with zeroed metrics, last accessed now.
    pub fn new(id: impl Into<String>, name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            route_affinity: route.into(),
            last_load_time_ms: 0.0,
            last_render_time_ms: 0.0,
            interaction_frequency: 0.0,
            user_engagement: 0.0,
            criticality_score: 0.0,
            last_accessed_at: Utc::now(),
            size_bytes: 0,
            dependencies: BTreeSet::new(),
        }
    }

    /// Whether this resource is needed on `route`: exact match, or nested
    /// under it on a `/` segment boundary (`/shop` serves `/shop/cart`, not `/shopping`).
    pub fn serves_route(&self, route: &str) -> bool {
        match self.route_affinity.strip_prefix(route) {
            Some("") => true,
            Some(rest) => route.ends_with('/') || rest.starts_with('/'),
            None => false,
        }
    }

    /// Clamp bounded fields into range.
    pub fn normalize(&mut self) {
        self.user_engagement = clamp_unit(self.user_engagement);
        self.criticality_score = clamp_unit(self.criticality_score);
        self.interaction_frequency = non_negative(self.interaction_frequency);
        self.last_load_time_ms = non_negative(self.last_load_time_ms);
        self.last_render_time_ms = non_negative(self.last_render_time_ms);
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Partial metrics update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceMetricsUpdate {
    pub last_load_time_ms: Option<f64>,
    pub last_render_time_ms: Option<f64>,
    pub interaction_frequency: Option<f64>,
    pub user_engagement: Option<f64>,
    pub criticality_score: Option<f64>,
    pub size_bytes: Option<u64>,
    pub dependencies: Option<BTreeSet<String>>,
}

impl ResourceMetricsUpdate {
    /// Merge into `descriptor` and refresh its access timestamp.
    pub fn apply_to(&self, descriptor: &mut ResourceDescriptor, now: DateTime<Utc>) {
        if let Some(v) = self.last_load_time_ms {
            descriptor.last_load_time_ms = v;
        }
        if let Some(v) = self.last_render_time_ms {
            descriptor.last_render_time_ms = v;
        }
        if let Some(v) = self.interaction_frequency {
            descriptor.interaction_frequency = v;
        }
        if let Some(v) = self.user_engagement {
            descriptor.user_engagement = v;
        }
        if let Some(v) = self.criticality_score {
            descriptor.criticality_score = v;
        }
        if let Some(v) = self.size_bytes {
            descriptor.size_bytes = v;
        }
        if let Some(ref v) = self.dependencies {
            descriptor.dependencies = v.clone();
        }
        descriptor.last_accessed_at = now;
        descriptor.normalize();
    }
}

/// A resource was used at a given hour (0-23) and ISO weekday (Mon=1..Sun=7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageObservation {
    pub resource_id: String,
    pub hour: u32,
    pub weekday: u32,
}

/// Immutable view of the registry handed to prediction strategies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Sorted by id when built from the registry; lookups do not rely on it.
    pub resources: Vec<ResourceDescriptor>,
    /// Historical route sequences, oldest first.
    pub navigation_paths: Vec<Vec<String>>,
    pub usage: Vec<UsageObservation>,
}

impl RegistrySnapshot {
    pub fn get(&self, id: &str) -> Option<&ResourceDescriptor> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Resources serving `route`, in snapshot order.
    pub fn for_route<'a>(&'a self, route: &'a str) -> impl Iterator<Item = &'a ResourceDescriptor> {
        self.resources.iter().filter(move |r| r.serves_route(route))
    }
}
