use attune_core::models::{LoadingPrediction, PredictionContext, Priority, RegistrySnapshot};
use attune_core::traits::IPredictionStrategy;

use super::estimate::estimate_load_ms;

/// Groups resources under the current route's first path segment so they
/// can be fetched together.
pub struct BundleStrategy {
    probability: f64,
    discount: f64,
    max_size: usize,
}

impl BundleStrategy {
    pub fn new(probability: f64, discount: f64, max_size: usize) -> Self {
        Self {
            probability,
            discount,
            max_size,
        }
    }
}

/// `/shop/cart/42` -> `/shop`; `/` and empty routes -> `/`.
pub fn route_prefix(route: &str) -> String {
    match route.split('/').find(|s| !s.is_empty()) {
        Some(segment) => format!("/{segment}"),
        None => "/".to_string(),
    }
}

impl IPredictionStrategy for BundleStrategy {
    fn name(&self) -> &'static str {
        "bundle"
    }

    fn predict(&self, snapshot: &RegistrySnapshot, ctx: &PredictionContext) -> Vec<LoadingPrediction> {
        let prefix = route_prefix(&ctx.current_route);
        let related: Vec<_> = snapshot
            .for_route(&prefix)
            .take(self.max_size)
            .collect();
        if related.len() <= 1 {
            return Vec::new();
        }

        related
            .into_iter()
            .map(|resource| LoadingPrediction {
                resource_id: resource.id.clone(),
                probability: self.probability,
                estimated_time_to_load_ms: estimate_load_ms(resource, ctx.network) * self.discount,
                priority: Priority::Medium,
                reason: format!("can be bundled with related resources under {prefix}"),
                contributing_factors: ["bundle-optimization", "component-relationship"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use attune_core::models::ResourceDescriptor;
    use chrono::Utc;

    use super::*;

    #[test]
    fn prefix_is_first_segment() {
        assert_eq!(route_prefix("/shop/cart/42"), "/shop");
        assert_eq!(route_prefix("shop"), "/shop");
        assert_eq!(route_prefix("/"), "/");
        assert_eq!(route_prefix(""), "/");
    }

    #[test]
    fn bundles_stop_at_segment_boundaries() {
        let snapshot = RegistrySnapshot {
            resources: vec![
                ResourceDescriptor::new("cart", "Cart", "/shop/cart"),
                ResourceDescriptor::new("shop", "Shop", "/shop"),
                ResourceDescriptor::new("shopping", "Shopping", "/shopping"),
                ResourceDescriptor::new("shopify", "Shopify", "/shopify/app"),
            ],
            ..Default::default()
        };
        let ctx = PredictionContext::at("/shop/cart/42", "s1", Utc::now());

        let mut ids: Vec<_> = BundleStrategy::new(0.4, 0.7, 5)
            .predict(&snapshot, &ctx)
            .into_iter()
            .map(|p| p.resource_id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["cart", "shop"]);
    }
}
