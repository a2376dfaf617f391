use std::collections::BTreeSet;

use attune_core::models::{LoadingPrediction, Priority};
use attune_prediction::consolidate;
use attune_prediction::strategies::navigation::transition_probabilities;
use proptest::prelude::*;

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
        Just(Priority::Critical),
    ]
}

fn prediction_strategy() -> impl Strategy<Value = LoadingPrediction> {
    (
        prop::sample::select(vec!["a", "b", "c", "d"]),
        0.0f64..=1.0,
        0.0f64..5000.0,
        priority_strategy(),
    )
        .prop_map(|(id, probability, ms, priority)| LoadingPrediction {
            resource_id: id.to_string(),
            probability,
            estimated_time_to_load_ms: ms,
            priority,
            reason: format!("r-{id}"),
            contributing_factors: BTreeSet::new(),
        })
}

proptest! {
    #[test]
    fn consolidated_ids_are_unique(preds in prop::collection::vec(prediction_strategy(), 0..40)) {
        let out = consolidate(preds);
        let ids: BTreeSet<_> = out.iter().map(|p| p.resource_id.clone()).collect();
        prop_assert_eq!(ids.len(), out.len());
    }

    #[test]
    fn consolidated_output_is_sorted(preds in prop::collection::vec(prediction_strategy(), 0..40)) {
        let out = consolidate(preds);
        for pair in out.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn consolidated_probability_is_mean_of_inputs(
        preds in prop::collection::vec(prediction_strategy(), 1..40)
    ) {
        let out = consolidate(preds.clone());
        for merged in &out {
            let group: Vec<_> = preds.iter().filter(|p| p.resource_id == merged.resource_id).collect();
            let mean = group.iter().map(|p| p.probability).sum::<f64>() / group.len() as f64;
            prop_assert!((merged.probability - mean).abs() < 1e-9);
            let max_priority = group.iter().map(|p| p.priority).max().unwrap();
            prop_assert_eq!(merged.priority, max_priority);
            prop_assert!((0.0..=1.0).contains(&merged.probability));
        }
    }

    #[test]
    fn transition_probabilities_sum_to_one_when_observed(
        paths in prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!["/a", "/b", "/c"]), 0..6),
            0..12,
        )
    ) {
        let paths: Vec<Vec<String>> = paths
            .into_iter()
            .map(|p| p.into_iter().map(String::from).collect())
            .collect();
        let probs = transition_probabilities(&paths, "/a");
        if !probs.is_empty() {
            let sum: f64 = probs.values().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }
    }
}
