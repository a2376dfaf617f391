use std::collections::BTreeMap;

use attune_core::models::{LoadingPrediction, PredictionContext, Priority, RegistrySnapshot, UsageObservation};
use attune_core::traits::IPredictionStrategy;

use super::estimate::estimate_load_ms;

/// Same hour on the same weekday counts fully, same hour on another day half.
const SAME_SLOT_WEIGHT: f64 = 1.0;
const SAME_HOUR_WEIGHT: f64 = 0.5;

/// Predicts resources habitually used at this hour and weekday.
pub struct TemporalStrategy {
    threshold: f64,
}

impl TemporalStrategy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

/// Per-resource co-occurrence probability with the `(hour, weekday)` slot.
pub fn slot_probabilities(usage: &[UsageObservation], hour: u32, weekday: u32) -> BTreeMap<String, f64> {
    let mut tallies: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for obs in usage {
        let weight = if obs.hour == hour && obs.weekday == weekday {
            SAME_SLOT_WEIGHT
        } else if obs.hour == hour {
            SAME_HOUR_WEIGHT
        } else {
            0.0
        };
        let tally = tallies.entry(obs.resource_id.as_str()).or_insert((0.0, 0));
        tally.0 += weight;
        tally.1 += 1;
    }
    tallies
        .into_iter()
        .map(|(id, (weighted, total))| (id.to_string(), weighted / total as f64))
        .collect()
}

impl IPredictionStrategy for TemporalStrategy {
    fn name(&self) -> &'static str {
        "temporal"
    }

    fn predict(&self, snapshot: &RegistrySnapshot, ctx: &PredictionContext) -> Vec<LoadingPrediction> {
        slot_probabilities(&snapshot.usage, ctx.hour_of_day, ctx.day_of_week)
            .into_iter()
            .filter(|(_, p)| *p > self.threshold)
            .filter_map(|(id, probability)| {
                let resource = snapshot.get(&id)?;
                Some(LoadingPrediction {
                    resource_id: id,
                    probability,
                    estimated_time_to_load_ms: estimate_load_ms(resource, ctx.network),
                    priority: Priority::Low,
                    reason: format!(
                        "temporal pattern suggests usage at {}:00 on day {}",
                        ctx.hour_of_day, ctx.day_of_week
                    ),
                    contributing_factors: ["time-of-day", "day-of-week"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                })
            })
            .collect()
    }
}
