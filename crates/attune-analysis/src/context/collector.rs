use attune_core::models::{
    AccessibilityFlags, ActivityLevel, DeviceTier, TimeBucket, UserContext,
};
use chrono::{DateTime, Timelike, Utc};

use super::EnvironmentSignals;

/// Build a context snapshot from host signals at `now`.
pub fn collect(signals: &EnvironmentSignals, now: DateTime<Utc>) -> UserContext {
    let hour = signals.hour_of_day.map(|h| h % 24).unwrap_or_else(|| now.hour());

    let session_duration_secs = signals
        .session_started_at
        .map(|start| (now - start).num_seconds().max(0) as u64)
        .unwrap_or(0);

    let activity_level = signals
        .interaction
        .as_ref()
        .map(|i| activity_from_click_rate(i.click_rate))
        .unwrap_or_default();

    let accessibility = AccessibilityFlags {
        reduced_motion: signals.reduced_motion.unwrap_or(false),
        high_contrast: signals.high_contrast.unwrap_or(false),
        large_text: signals.large_text.unwrap_or(false),
        screen_reader: signals.screen_reader.unwrap_or(false),
    };

    if signals.hour_of_day.is_none() {
        tracing::trace!(hour, "hour of day not reported, using clock");
    }

    UserContext {
        time_bucket: TimeBucket::from_hour(hour),
        session_duration_secs,
        activity_level,
        interaction_patterns: signals.interaction.clone().unwrap_or_default(),
        preferences: signals.preferences.unwrap_or_default(),
        accessibility,
        network: signals.network.unwrap_or_default(),
        device: device_tier(signals.device_memory_gb, signals.core_count),
    }
}

/// Clicks per minute: >=10 high, >=3 medium, otherwise low.
pub fn activity_from_click_rate(click_rate: f64) -> ActivityLevel {
    if !click_rate.is_finite() {
        return ActivityLevel::default();
    }
    if click_rate >= 10.0 {
        ActivityLevel::High
    } else if click_rate >= 3.0 {
        ActivityLevel::Medium
    } else {
        ActivityLevel::Low
    }
}

/// Device tier from memory (GB) and core count. Unknown halves are ignored;
/// both unknown is medium.
pub fn device_tier(memory_gb: Option<f64>, cores: Option<u32>) -> DeviceTier {
    if memory_gb.is_none() && cores.is_none() {
        return DeviceTier::Medium;
    }
    let low = memory_gb.is_some_and(|m| m < 4.0) || cores.is_some_and(|c| c < 4);
    if low {
        return DeviceTier::Low;
    }
    let high = memory_gb.map_or(true, |m| m >= 8.0) && cores.map_or(true, |c| c >= 8);
    if high {
        DeviceTier::High
    } else {
        DeviceTier::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_core::models::{InteractionPatterns, NetworkTier};
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, hour, 0, 0).unwrap()
    }

    #[test]
    fn absent_signals_take_defaults() {
        let ctx = collect(&EnvironmentSignals::default(), at(9));
        assert_eq!(ctx.time_bucket, TimeBucket::Morning);
        assert_eq!(ctx.session_duration_secs, 0);
        assert_eq!(ctx.activity_level, ActivityLevel::Medium);
        assert_eq!(ctx.network, NetworkTier::Fast);
        assert_eq!(ctx.device, DeviceTier::Medium);
        assert_eq!(ctx.accessibility, AccessibilityFlags::default());
    }

    #[test]
    fn explicit_hour_overrides_clock() {
        let signals = EnvironmentSignals {
            hour_of_day: Some(22),
            ..Default::default()
        };
        assert_eq!(collect(&signals, at(9)).time_bucket, TimeBucket::Night);
    }

    #[test]
    fn session_duration_from_start() {
        let signals = EnvironmentSignals {
            session_started_at: Some(at(9) - chrono::Duration::minutes(45)),
            ..Default::default()
        };
        assert_eq!(collect(&signals, at(9)).session_duration_secs, 2700);

        // A start in the future clamps to zero.
        let signals = EnvironmentSignals {
            session_started_at: Some(at(10)),
            ..Default::default()
        };
        assert_eq!(collect(&signals, at(9)).session_duration_secs, 0);
    }

    #[test]
    fn activity_thresholds() {
        assert_eq!(activity_from_click_rate(12.0), ActivityLevel::High);
        assert_eq!(activity_from_click_rate(3.0), ActivityLevel::Medium);
        assert_eq!(activity_from_click_rate(0.5), ActivityLevel::Low);

        let signals = EnvironmentSignals {
            interaction: Some(InteractionPatterns {
                click_rate: 15.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(collect(&signals, at(9)).activity_level, ActivityLevel::High);
    }

    #[test]
    fn device_tiers() {
        assert_eq!(device_tier(Some(2.0), Some(8)), DeviceTier::Low);
        assert_eq!(device_tier(Some(16.0), Some(2)), DeviceTier::Low);
        assert_eq!(device_tier(Some(16.0), Some(12)), DeviceTier::High);
        assert_eq!(device_tier(Some(8.0), None), DeviceTier::High);
        assert_eq!(device_tier(Some(6.0), Some(6)), DeviceTier::Medium);
        assert_eq!(device_tier(None, None), DeviceTier::Medium);
    }
}
