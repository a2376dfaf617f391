//! Adaptation Generator: category + context to concrete property sets.
//!
//! Merge order is category tokens, then context adjustments, then
//! accessibility overrides. Accessibility always wins.

mod generator;
mod tokens;

pub use generator::{generate_adaptations, is_critical_property, GeneratedAdaptations};
pub use tokens::{palette, Palette};
