//! # attune-analysis
//!
//! The two leaf components of the engine:
//! - **content**: turns raw text into a bounded [`ContentFeatures`] vector.
//! - **context**: turns optional host signals into an owned [`UserContext`] snapshot.
//!
//! Both are pure functions of their input plus fixed tables; neither can fail.
//!
//! [`ContentFeatures`]: attune_core::models::ContentFeatures
//! [`UserContext`]: attune_core::models::UserContext

pub mod content;
pub mod context;
pub mod input;

pub use content::analyze;
pub use context::{collect, EnvironmentSignals};
pub use input::{ContentInput, ContextInput};
