//! Context Collector: host signals to an owned [`UserContext`] snapshot.
//!
//! [`UserContext`]: attune_core::models::UserContext

mod collector;
mod signals;

pub use collector::{activity_from_click_rate, collect, device_tier};
pub use signals::EnvironmentSignals;
