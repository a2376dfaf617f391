//! # attune-runtime
//!
//! [`AttuneRuntime`] owns every engine and collaborator for one host
//! context. There is no global instance: create one per context and drop
//! it (or call [`AttuneRuntime::reset`]) to start over.

pub mod options;
pub mod runtime;
pub mod stats;

pub use options::RuntimeOptions;
pub use runtime::AttuneRuntime;
pub use stats::RuntimeStats;
