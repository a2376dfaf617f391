use attune_core::models::{InteractionPatterns, NetworkTier, Preferences};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw facts reported by the host runtime. Every field is optional; an
/// absent signal takes a documented default, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSignals {
    /// Local hour (0-23). Absent: read from the clock.
    pub hour_of_day: Option<u32>,
    pub reduced_motion: Option<bool>,
    pub high_contrast: Option<bool>,
    pub large_text: Option<bool>,
    pub screen_reader: Option<bool>,
    pub network: Option<NetworkTier>,
    pub device_memory_gb: Option<f64>,
    pub core_count: Option<u32>,
    pub session_started_at: Option<DateTime<Utc>>,
    pub interaction: Option<InteractionPatterns>,
    pub preferences: Option<Preferences>,
}
