//! # attune-core
//!
//! Foundation crate for the Attune adaptation engine.
//! Defines the data model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AttuneConfig;
pub use errors::{AttuneError, AttuneResult};
pub use models::{
    Category, ContentFeatures, LoadingPrediction, Priority, Recommendation, ResourceDescriptor,
    UserContext,
};
