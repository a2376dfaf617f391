//! # attune-recommend
//!
//! Picks an adaptation profile for a piece of content in a user context.
//!
//! | Component | Module |
//! |-----------|--------|
//! | Profile Scoring Engine | [`scoring`] |
//! | Adaptation Generator | [`adaptation`] |
//! | Recommendation Cache | [`cache`] |
//! | Feedback / Learning Loop | [`learning`] |
//!
//! [`RecommendationEngine`] wires them together. Scoring is deterministic
//! weighted-rule evaluation; confidence is scaled by a rolling accuracy
//! estimate that only feedback can move.

pub mod adaptation;
pub mod cache;
pub mod cache_key;
pub mod engine;
pub mod learning;
pub mod scoring;

pub use adaptation::{generate_adaptations, GeneratedAdaptations};
pub use cache::RecommendationCache;
pub use cache_key::context_hash;
pub use engine::RecommendationEngine;
pub use learning::{LearningLoop, LearningStats};
pub use scoring::{score, select, CategoryScore, Selection};
