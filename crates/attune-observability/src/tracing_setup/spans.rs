//! Span definitions per operation: recommendation, prediction, scheduling, learning.

/// Create a recommendation span.
#[macro_export]
macro_rules! recommendation_span {
    ($cache_key:expr, $force_refresh:expr) => {
        tracing::info_span!(
            "attune.recommendation",
            cache_key = %$cache_key,
            force_refresh = $force_refresh
        )
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($route:expr, $session_id:expr) => {
        tracing::info_span!("attune.prediction", route = %$route, session_id = %$session_id)
    };
}

/// Create a scheduler span.
#[macro_export]
macro_rules! scheduler_span {
    ($prediction_count:expr) => {
        tracing::info_span!("attune.scheduler", prediction_count = $prediction_count)
    };
}

/// Create a learning span.
#[macro_export]
macro_rules! learning_span {
    ($session_id:expr) => {
        tracing::info_span!("attune.learning", session_id = %$session_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RECOMMENDATION: &str = "attune.recommendation";
    pub const PREDICTION: &str = "attune.prediction";
    pub const SCHEDULER: &str = "attune.scheduler";
    pub const LEARNING: &str = "attune.learning";
}
