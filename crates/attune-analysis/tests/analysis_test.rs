use attune_analysis::{ContentInput, ContextInput, EnvironmentSignals};
use attune_core::models::*;
use chrono::{TimeZone, Utc};

#[test]
fn content_input_variants_resolve() {
    let from_text = ContentInput::from("learn with the community").features();
    assert!(from_text.has_topic("learning"));
    assert!(from_text.has_topic("social"));

    let precomputed = ContentFeatures {
        energy: EnergyLevel::High,
        ..Default::default()
    };
    assert_eq!(ContentInput::Features(precomputed.clone()).features(), precomputed);
    assert_eq!(ContentInput::Empty.features(), ContentFeatures::default());
}

#[test]
fn context_input_snapshot_is_owned() {
    let now = Utc.with_ymd_and_hms(2024, 5, 6, 14, 0, 0).unwrap();
    let mut signals = EnvironmentSignals {
        reduced_motion: Some(true),
        ..Default::default()
    };
    let input = ContextInput::Signals(signals.clone());
    let snapshot = input.snapshot(now);

    // Mutating the source after the snapshot does not affect it.
    signals.reduced_motion = Some(false);
    assert!(snapshot.accessibility.reduced_motion);
    assert_eq!(snapshot.time_bucket, TimeBucket::Afternoon);
}

#[test]
fn default_context_input_matches_empty_signals() {
    let now = Utc.with_ymd_and_hms(2024, 5, 6, 19, 0, 0).unwrap();
    let ctx = ContextInput::Default.snapshot(now);
    assert_eq!(ctx.time_bucket, TimeBucket::Evening);
    assert_eq!(ctx.preferences, Preferences::default());
    assert_eq!(ctx.activity_level, ActivityLevel::Medium);
}

#[test]
fn snapshot_variant_passes_through() {
    let ctx = UserContext {
        activity_level: ActivityLevel::High,
        time_bucket: TimeBucket::Night,
        ..Default::default()
    };
    let now = Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap();
    assert_eq!(ContextInput::Snapshot(ctx.clone()).snapshot(now), ctx);
}

#[test]
fn content_input_deserializes_from_tagged_json() {
    let input: ContentInput =
        serde_json::from_str(r#"{"type":"text","value":"calm peaceful evening"}"#).unwrap();
    assert_eq!(input.features().energy, EnergyLevel::Low);
    let empty: ContentInput = serde_json::from_str(r#"{"type":"empty"}"#).unwrap();
    assert!(matches!(empty, ContentInput::Empty));
}
