//! The five prediction strategies and the registry of enabled ones.

pub mod bundle;
pub mod criticality;
pub mod estimate;
pub mod interaction;
pub mod navigation;
pub mod temporal;

pub use bundle::BundleStrategy;
pub use criticality::CriticalityStrategy;
pub use interaction::InteractionStrategy;
pub use navigation::NavigationStrategy;
pub use temporal::TemporalStrategy;

use std::collections::BTreeSet;

use attune_core::config::PredictionConfig;
use attune_core::models::{LoadingPrediction, PredictionContext, RegistrySnapshot};
use attune_core::traits::IPredictionStrategy;

/// Ordered set of strategies with per-name enable flags.
pub struct StrategySet {
    strategies: Vec<Box<dyn IPredictionStrategy>>,
    disabled: BTreeSet<String>,
}

impl StrategySet {
    /// All five built-in strategies, minus those named in
    /// `config.disabled_strategies`.
    pub fn with_defaults(config: &PredictionConfig) -> Self {
        let strategies: Vec<Box<dyn IPredictionStrategy>> = vec![
            Box::new(NavigationStrategy::new(config.navigation_threshold)),
            Box::new(InteractionStrategy::new(config.interaction_threshold)),
            Box::new(TemporalStrategy::new(config.temporal_threshold)),
            Box::new(CriticalityStrategy::new(config.criticality_threshold)),
            Box::new(BundleStrategy::new(
                config.bundle_probability,
                config.bundle_discount,
                config.max_bundle_size,
            )),
        ];
        Self {
            strategies,
            disabled: config.disabled_strategies.iter().cloned().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
            disabled: BTreeSet::new(),
        }
    }

    /// Add a strategy, replacing any existing one with the same name.
    pub fn register(&mut self, strategy: Box<dyn IPredictionStrategy>) {
        self.strategies.retain(|s| s.name() != strategy.name());
        self.strategies.push(strategy);
    }

    /// Returns `false` if no strategy has that name.
    pub fn enable(&mut self, name: &str) -> bool {
        if !self.contains(name) {
            return false;
        }
        self.disabled.remove(name);
        true
    }

    /// Returns `false` if no strategy has that name.
    pub fn disable(&mut self, name: &str) -> bool {
        if !self.contains(name) {
            return false;
        }
        self.disabled.insert(name.to_string());
        true
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.contains(name) && !self.disabled.contains(name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run every enabled strategy, concatenating their output in order.
    pub fn run(&self, snapshot: &RegistrySnapshot, ctx: &PredictionContext) -> Vec<LoadingPrediction> {
        let mut all = Vec::new();
        for strategy in self.strategies.iter().filter(|s| !self.disabled.contains(s.name())) {
            let predictions = strategy.predict(snapshot, ctx);
            tracing::trace!(strategy = strategy.name(), count = predictions.len(), "strategy ran");
            all.extend(predictions);
        }
        all
    }

    fn contains(&self, name: &str) -> bool {
        self.strategies.iter().any(|s| s.name() == name)
    }
}
