use std::sync::Arc;

use attune_core::traits::{IAnalyticsSink, IIdleSignal, IKeyValueStore, IResourceLoader};

/// Options for constructing a runtime.
#[derive(Default, Clone)]
pub struct RuntimeOptions {
    /// TOML configuration. If None, uses defaults.
    pub config_toml: Option<String>,
    /// Persistence backend. If None, state lives in memory only.
    pub store: Option<Arc<dyn IKeyValueStore>>,
    /// Resource fetcher. Preloading is unavailable without one.
    pub loader: Option<Arc<dyn IResourceLoader>>,
    /// Host idle signal for medium and low loading tiers.
    pub idle_signal: Option<Arc<dyn IIdleSignal>>,
    /// Analytics destination. If None, events stay queued locally.
    pub analytics_sink: Option<Arc<dyn IAnalyticsSink>>,
    /// Attached to analytics events; None reports as anonymous.
    pub user_id: Option<String>,
}
