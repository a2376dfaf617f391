use serde::{Deserialize, Serialize};

use super::defaults;

/// Persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Prefix applied to every persisted key (`<namespace>:<key>`).
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: defaults::DEFAULT_STORAGE_NAMESPACE.to_string(),
        }
    }
}
