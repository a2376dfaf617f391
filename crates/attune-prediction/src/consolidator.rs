//! Prediction Consolidator.
//!
//! Duplicate predictions for one resource combine as follows:
//! - probability: arithmetic mean over all duplicates
//! - reasons: joined with ` + `, in arrival order
//! - contributing factors: union
//! - priority: highest
//! - estimated load time: lowest
//!
//! Output is sorted by probability descending, then resource id.

use std::collections::{BTreeMap, BTreeSet};

use attune_core::models::{LoadingPrediction, Priority};

struct Accumulator {
    probability_sum: f64,
    count: usize,
    reasons: Vec<String>,
    factors: BTreeSet<String>,
    priority: Priority,
    estimated_time_to_load_ms: f64,
}

pub fn consolidate(predictions: Vec<LoadingPrediction>) -> Vec<LoadingPrediction> {
    let mut merged: BTreeMap<String, Accumulator> = BTreeMap::new();

    for prediction in predictions {
        merged
            .entry(prediction.resource_id)
            .and_modify(|acc| {
                acc.probability_sum += prediction.probability;
                acc.count += 1;
                acc.reasons.push(prediction.reason.clone());
                acc.factors.extend(prediction.contributing_factors.iter().cloned());
                acc.priority = acc.priority.max(prediction.priority);
                acc.estimated_time_to_load_ms =
                    acc.estimated_time_to_load_ms.min(prediction.estimated_time_to_load_ms);
            })
            .or_insert_with(|| Accumulator {
                probability_sum: prediction.probability,
                count: 1,
                reasons: vec![prediction.reason.clone()],
                factors: prediction.contributing_factors.clone(),
                priority: prediction.priority,
                estimated_time_to_load_ms: prediction.estimated_time_to_load_ms,
            });
    }

    let mut result: Vec<LoadingPrediction> = merged
        .into_iter()
        .map(|(resource_id, acc)| LoadingPrediction {
            resource_id,
            probability: (acc.probability_sum / acc.count as f64).clamp(0.0, 1.0),
            estimated_time_to_load_ms: acc.estimated_time_to_load_ms,
            priority: acc.priority,
            reason: acc.reasons.join(" + "),
            contributing_factors: acc.factors,
        })
        .collect();

    result.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.resource_id.cmp(&b.resource_id))
    });
    result
}
