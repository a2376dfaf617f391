use attune_core::models::{LoadingPrediction, PredictionContext, Priority, RegistrySnapshot};
use attune_core::traits::IPredictionStrategy;

use super::estimate::estimate_load_ms;

/// Always loads the critical resources of the current route, first.
pub struct CriticalityStrategy {
    threshold: f64,
}

impl CriticalityStrategy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl IPredictionStrategy for CriticalityStrategy {
    fn name(&self) -> &'static str {
        "criticality"
    }

    fn predict(&self, snapshot: &RegistrySnapshot, ctx: &PredictionContext) -> Vec<LoadingPrediction> {
        let mut critical: Vec<_> = snapshot
            .for_route(&ctx.current_route)
            .filter(|r| r.criticality_score > self.threshold)
            .collect();
        critical.sort_by(|a, b| {
            b.criticality_score
                .partial_cmp(&a.criticality_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        critical
            .into_iter()
            .map(|resource| LoadingPrediction {
                resource_id: resource.id.clone(),
                probability: resource.criticality_score,
                estimated_time_to_load_ms: estimate_load_ms(resource, ctx.network),
                priority: Priority::Critical,
                reason: format!(
                    "critical resource for current route (score: {:.2})",
                    resource.criticality_score
                ),
                contributing_factors: ["criticality-score", "route-dependency"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })
            .collect()
    }
}
