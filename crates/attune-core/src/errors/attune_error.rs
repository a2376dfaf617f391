use super::{AnalyticsError, LoadError, StorageError};

/// Top-level error type for the Attune engine.
///
/// Only `UnknownCategory` is considered fatal on the recommendation path;
/// everything else is either recovered from internally or reported by
/// collaborators.
#[derive(Debug, thiserror::Error)]
pub enum AttuneError {
    #[error("unknown category: {id}")]
    UnknownCategory { id: String },

    #[error("resource not found: {id}")]
    ResourceNotFound { id: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("analytics error: {0}")]
    AnalyticsError(#[from] AnalyticsError),

    #[error("resource load error: {0}")]
    LoadError(#[from] LoadError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error("degraded mode: {component} using fallback {fallback}")]
    DegradedMode { component: String, fallback: String },
}

pub type AttuneResult<T> = Result<T, AttuneError>;
