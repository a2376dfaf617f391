/// Errors raised while fetching a predicted resource.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("fetch failed for {resource_id}: {reason}")]
    FetchFailed { resource_id: String, reason: String },

    #[error("fetch timed out for {resource_id} after {elapsed_ms}ms")]
    TimedOut { resource_id: String, elapsed_ms: u64 },
}
