use attune_analysis::content::analyze;
use attune_analysis::context::{activity_from_click_rate, collect};
use attune_analysis::EnvironmentSignals;
use attune_core::models::{ActivityLevel, PhilosophyDimension, TimeBucket};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

proptest! {
    #[test]
    fn analysis_is_deterministic(text in ".{0,200}") {
        prop_assert_eq!(analyze(&text), analyze(&text));
    }

    #[test]
    fn philosophy_scores_stay_in_unit_range(words in prop::collection::vec("[a-z]{1,12}", 0..60)) {
        let features = analyze(&words.join(" "));
        for dim in PhilosophyDimension::ALL {
            let score = features.philosophy(dim);
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn case_and_punctuation_do_not_change_features(words in prop::collection::vec("[a-z]{1,10}", 0..30)) {
        let plain = words.join(" ");
        let noisy = words
            .iter()
            .map(|w| format!("{}!", w.to_uppercase()))
            .collect::<Vec<_>>()
            .join("  ");
        prop_assert_eq!(analyze(&plain), analyze(&noisy));
    }

    #[test]
    fn every_hour_maps_to_a_bucket(hour in 0u32..24) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0).unwrap();
        let ctx = collect(&EnvironmentSignals::default(), now);
        prop_assert_eq!(ctx.time_bucket, TimeBucket::from_hour(hour));
    }

    #[test]
    fn activity_is_monotonic_in_click_rate(a in 0.0f64..50.0, b in 0.0f64..50.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |l: ActivityLevel| match l {
            ActivityLevel::Low => 0,
            ActivityLevel::Medium => 1,
            ActivityLevel::High => 2,
        };
        prop_assert!(rank(activity_from_click_rate(lo)) <= rank(activity_from_click_rate(hi)));
    }
}
