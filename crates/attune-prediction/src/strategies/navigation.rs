use std::collections::BTreeMap;

use attune_core::models::{LoadingPrediction, PredictionContext, Priority, RegistrySnapshot};
use attune_core::traits::IPredictionStrategy;

use super::estimate::estimate_load_ms;

/// Predicts resources of the routes that historically follow the current one.
pub struct NavigationStrategy {
    threshold: f64,
}

impl NavigationStrategy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

/// Empirical probability of each successor route of `current`.
pub fn transition_probabilities(paths: &[Vec<String>], current: &str) -> BTreeMap<String, f64> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0usize;
    for path in paths {
        for pair in path.windows(2) {
            if pair[0] == current {
                *counts.entry(pair[1].clone()).or_default() += 1;
                total += 1;
            }
        }
    }
    counts
        .into_iter()
        .map(|(route, n)| (route, n as f64 / total as f64))
        .collect()
}

fn priority_for(probability: f64) -> Priority {
    if probability > 0.7 {
        Priority::High
    } else if probability > 0.5 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

impl IPredictionStrategy for NavigationStrategy {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn predict(&self, snapshot: &RegistrySnapshot, ctx: &PredictionContext) -> Vec<LoadingPrediction> {
        let mut out = Vec::new();
        for (route, probability) in transition_probabilities(&snapshot.navigation_paths, &ctx.current_route) {
            if probability <= self.threshold {
                continue;
            }
            for resource in snapshot.for_route(&route) {
                out.push(LoadingPrediction {
                    resource_id: resource.id.clone(),
                    probability,
                    estimated_time_to_load_ms: estimate_load_ms(resource, ctx.network),
                    priority: priority_for(probability),
                    reason: format!(
                        "navigation pattern suggests {}% chance of visiting {}",
                        (probability * 100.0).round(),
                        route
                    ),
                    contributing_factors: ["navigation-history", "route-probability"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter().map(|p| p.iter().map(|s| s.to_string()).collect()).collect()
    }

    #[test]
    fn probabilities_over_all_successors() {
        let p = paths(&[
            &["/home", "/shop", "/cart"],
            &["/home", "/shop"],
            &["/home", "/profile"],
            &["/shop", "/home", "/shop"],
        ]);
        let probs = transition_probabilities(&p, "/home");
        assert_eq!(probs.get("/shop"), Some(&0.75));
        assert_eq!(probs.get("/profile"), Some(&0.25));
    }

    #[test]
    fn no_history_means_no_transitions() {
        assert!(transition_probabilities(&[], "/home").is_empty());
    }

    #[test]
    fn priority_bands() {
        assert_eq!(priority_for(0.75), Priority::High);
        assert_eq!(priority_for(0.6), Priority::Medium);
        assert_eq!(priority_for(0.4), Priority::Low);
    }
}
