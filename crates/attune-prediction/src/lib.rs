//! # attune-prediction
//!
//! Predicts which resources a user will need next.
//!
//! ## 5 Prediction Strategies
//!
//! | Strategy | Signal Source |
//! |----------|--------------|
//! | Navigation | Route transitions in recorded navigation paths |
//! | Interaction | Interaction frequency, engagement, recency on the current route |
//! | Temporal | Hour-of-day / weekday usage co-occurrence |
//! | Criticality | Criticality score of resources on the current route |
//! | Bundle | Resources sharing the current route prefix |
//!
//! ## Consolidation
//!
//! When a resource appears in several strategies the probabilities are
//! averaged (arithmetic mean), reasons concatenated, factors unioned and the
//! highest priority kept.

pub mod cache;
pub mod consolidator;
pub mod engine;
pub mod history;
pub mod registry;
pub mod strategies;

pub use cache::PredictionCache;
pub use consolidator::consolidate;
pub use engine::PredictionEngine;
pub use history::BehaviorHistory;
pub use registry::ResourceRegistry;
pub use strategies::StrategySet;
