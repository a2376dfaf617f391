/// Errors raised by an analytics sink.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics sink unreachable: {reason}")]
    SinkUnreachable { reason: String },

    #[error("event rejected by sink: {reason}")]
    Rejected { reason: String },
}
