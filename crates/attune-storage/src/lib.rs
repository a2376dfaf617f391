//! # attune-storage
//!
//! Engine state persistence over an injected key-value store, an in-memory
//! store backed by `DashMap`, and the analytics dispatcher with its bounded
//! offline queue.

pub mod analytics;
pub mod memory;
pub mod state;

pub use analytics::{AnalyticsDispatcher, DispatchOutcome, FlushReport};
pub use memory::MemoryKeyValueStore;
pub use state::{LoadOutcome, PersistedState, StateStore};
