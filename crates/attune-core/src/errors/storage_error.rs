/// Errors raised by a key-value persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("backend unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    #[error("corrupt value under key {key}: {details}")]
    CorruptValue { key: String, details: String },
}
