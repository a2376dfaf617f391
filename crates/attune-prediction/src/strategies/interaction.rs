use attune_core::models::{LoadingPrediction, PredictionContext, Priority, RegistrySnapshot, ResourceDescriptor};
use attune_core::traits::IPredictionStrategy;
use chrono::{DateTime, Utc};

use super::estimate::estimate_load_ms;

/// Scores resources on the current route by how much they get used.
pub struct InteractionStrategy {
    threshold: f64,
}

impl InteractionStrategy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

/// 0.3 if accessed within the hour, 0.2 within 6h, 0.1 within 24h.
pub fn recency_bonus(last_accessed_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let hours = (now - last_accessed_at).num_minutes() as f64 / 60.0;
    if hours < 1.0 {
        0.3
    } else if hours < 6.0 {
        0.2
    } else if hours < 24.0 {
        0.1
    } else {
        0.0
    }
}

/// `min(1, frequency / 100 + engagement * 0.2 + recency)`.
pub fn interaction_probability(resource: &ResourceDescriptor, now: DateTime<Utc>) -> f64 {
    (resource.interaction_frequency / 100.0
        + resource.user_engagement * 0.2
        + recency_bonus(resource.last_accessed_at, now))
    .min(1.0)
}

impl IPredictionStrategy for InteractionStrategy {
    fn name(&self) -> &'static str {
        "interaction"
    }

    fn predict(&self, snapshot: &RegistrySnapshot, ctx: &PredictionContext) -> Vec<LoadingPrediction> {
        snapshot
            .for_route(&ctx.current_route)
            .filter_map(|resource| {
                let probability = interaction_probability(resource, ctx.now);
                (probability > self.threshold).then(|| LoadingPrediction {
                    resource_id: resource.id.clone(),
                    probability,
                    estimated_time_to_load_ms: estimate_load_ms(resource, ctx.network),
                    priority: if probability > 0.8 {
                        Priority::Critical
                    } else {
                        Priority::Medium
                    },
                    reason: format!(
                        "high interaction frequency ({}) on this route",
                        resource.interaction_frequency
                    ),
                    contributing_factors: ["interaction-frequency", "user-engagement"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                })
            })
            .collect()
    }
}
