use crate::errors::StorageError;

/// Durable string key-value store (browser local storage, a file, a KV service).
///
/// Synchronous: persistence happens outside the recommendation hot path.
pub trait IKeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
