mod analytics;
mod loader;
mod storage;
mod strategy;

pub use analytics::IAnalyticsSink;
pub use loader::{IIdleSignal, ILoadObserver, IResourceLoader};
pub use storage::IKeyValueStore;
pub use strategy::IPredictionStrategy;
