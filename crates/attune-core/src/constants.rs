/// Attune engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on concurrent loads in a single critical batch.
pub const MAX_CRITICAL_CONCURRENCY: usize = 10;

/// Satisfaction rating bounds accepted by the feedback loop.
pub const MIN_SATISFACTION: u8 = 1;
pub const MAX_SATISFACTION: u8 = 5;

/// Load time assumed for a resource that has never been measured (ms).
pub const UNMEASURED_LOAD_TIME_MS: f64 = 100.0;

/// Session length after which a session counts as "long" for scoring (seconds).
pub const LONG_SESSION_SECS: u64 = 1_800;

/// Persisted state keys, namespaced at runtime as `<namespace>:<key>`.
pub const KEY_MODEL_ACCURACY: &str = "model_accuracy";
pub const KEY_LEARNING_RECORDS: &str = "learning_records";
pub const KEY_LAST_CATEGORY: &str = "last_category";
pub const KEY_ANALYTICS_QUEUE: &str = "analytics_queue";
