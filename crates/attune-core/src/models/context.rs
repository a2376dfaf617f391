use serde::{Deserialize, Serialize};

/// Coarse time-of-day bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeBucket {
    /// morning (6-11), afternoon (12-16), evening (17-20), night (21-5).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

/// How actively the user is interacting right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ActivityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Observed interaction statistics for the current session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionPatterns {
    /// Clicks per minute.
    pub click_rate: f64,
    /// Pixels per second.
    pub scroll_speed: f64,
    /// Seconds per page.
    pub time_per_page: f64,
    pub return_visits: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrightnessPreference {
    #[default]
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastPreference {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationPreference {
    Minimal,
    #[default]
    Normal,
    Enhanced,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusPreference {
    Productivity,
    Entertainment,
    #[default]
    Learning,
}

impl FocusPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Productivity => "productivity",
            Self::Entertainment => "entertainment",
            Self::Learning => "learning",
        }
    }
}

/// Stored user preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preferences {
    pub brightness: BrightnessPreference,
    pub contrast: ContrastPreference,
    pub animation: AnimationPreference,
    pub focus: FocusPreference,
}

/// Accessibility flags reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessibilityFlags {
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub large_text: bool,
    pub screen_reader: bool,
}

impl AccessibilityFlags {
    /// Compact bitset, stable across releases (used in cache keys).
    pub fn bits(&self) -> u8 {
        (self.reduced_motion as u8)
            | (self.high_contrast as u8) << 1
            | (self.large_text as u8) << 2
            | (self.screen_reader as u8) << 3
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkTier {
    Slow,
    #[default]
    Fast,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceTier {
    Low,
    #[default]
    Medium,
    High,
}

/// Snapshot of the user's environment, taken at the start of a request.
///
/// The engine only ever reads this; the Context Collector produces a fresh
/// owned copy per request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    pub time_bucket: TimeBucket,
    pub session_duration_secs: u64,
    pub activity_level: ActivityLevel,
    pub interaction_patterns: InteractionPatterns,
    pub preferences: Preferences,
    pub accessibility: AccessibilityFlags,
    pub network: NetworkTier,
    pub device: DeviceTier,
}
