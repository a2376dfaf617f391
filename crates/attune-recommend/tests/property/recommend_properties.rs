use attune_core::models::*;
use attune_recommend::{generate_adaptations, score, select};
use proptest::prelude::*;

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_context() -> impl Strategy<Value = UserContext> {
    (
        prop::sample::select(vec![TimeBucket::Morning, TimeBucket::Afternoon, TimeBucket::Evening, TimeBucket::Night]),
        prop::sample::select(vec![ActivityLevel::Low, ActivityLevel::Medium, ActivityLevel::High]),
        prop::sample::select(vec![AnimationPreference::Minimal, AnimationPreference::Normal, AnimationPreference::Enhanced]),
        prop::sample::select(vec![FocusPreference::Productivity, FocusPreference::Entertainment, FocusPreference::Learning]),
        0u64..7_200,
        any::<(bool, bool, bool)>(),
    )
        .prop_map(|(time_bucket, activity_level, animation, focus, session, (hc, lt, sr))| UserContext {
            time_bucket,
            activity_level,
            session_duration_secs: session,
            preferences: Preferences {
                animation,
                focus,
                ..Default::default()
            },
            accessibility: AccessibilityFlags {
                reduced_motion: false,
                high_contrast: hc,
                large_text: lt,
                screen_reader: sr,
            },
            ..Default::default()
        })
}

fn arb_features() -> impl Strategy<Value = ContentFeatures> {
    (
        prop::sample::select(vec![EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High]),
        prop::sample::select(EmotionalTone::PRIORITY.to_vec()),
        prop::collection::btree_set(
            prop::sample::select(vec!["learning", "marketplace", "social", "gaming", "wellness"]),
            0..5,
        ),
        prop::collection::vec(0.0f64..=1.0, 4),
    )
        .prop_map(|(energy, emotional_tone, topics, scores)| ContentFeatures {
            energy,
            emotional_tone,
            topics: topics.into_iter().map(String::from).collect(),
            philosophy_scores: PhilosophyDimension::ALL.into_iter().zip(scores).collect(),
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn selection_is_deterministic(features in arb_features(), ctx in arb_context(), acc in 0.0f64..=0.95) {
        let a = select(&score(&features, &ctx), acc, &ctx);
        let b = select(&score(&features, &ctx), acc, &ctx);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn confidence_is_bounded_by_accuracy(features in arb_features(), ctx in arb_context(), acc in 0.0f64..=0.95) {
        let selection = select(&score(&features, &ctx), acc, &ctx);
        prop_assert!(selection.confidence >= 0.0);
        prop_assert!(selection.confidence <= acc + 1e-9);
    }

    #[test]
    fn scores_never_negative(features in arb_features(), ctx in arb_context()) {
        for s in score(&features, &ctx) {
            prop_assert!(s.score >= 0.0);
            prop_assert!(s.score <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn reduced_motion_zeroes_every_duration(category in arb_category(), mut ctx in arb_context()) {
        ctx.accessibility.reduced_motion = true;
        let generated = generate_adaptations(category, &ctx);
        let mut durations = 0;
        for (k, v) in generated.adaptations.iter() {
            if k.ends_with("-duration") {
                durations += 1;
                prop_assert_eq!(v.as_str(), "0ms");
            }
        }
        prop_assert!(durations >= 3);
    }
}
