use async_trait::async_trait;

use crate::errors::LoadError;
use crate::models::ResourceDescriptor;

/// Fetches a resource (dynamic import, network fetch, disk read).
#[async_trait]
pub trait IResourceLoader: Send + Sync {
    async fn load(&self, resource: &ResourceDescriptor) -> Result<(), LoadError>;
}

/// Host signal that spare capacity is available for low-priority work.
#[async_trait]
pub trait IIdleSignal: Send + Sync {
    /// Resolves when the host reports idle capacity. May never resolve.
    async fn wait_for_idle(&self);
}

/// Receives measured load durations for successfully loaded resources.
pub trait ILoadObserver: Send + Sync {
    fn on_loaded(&self, resource_id: &str, elapsed_ms: f64);
}
