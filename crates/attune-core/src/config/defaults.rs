// Single source of truth for all default values.

// --- Recommendation ---
pub const DEFAULT_RECOMMENDATION_CACHE_CAPACITY: u64 = 200;
pub const DEFAULT_LEARNING_BUFFER_CAPACITY: usize = 100;
pub const DEFAULT_INITIAL_ACCURACY: f64 = 0.75;
pub const DEFAULT_MAX_ACCURACY: f64 = 0.95;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_LEARNING_ENABLED: bool = true;

// --- Prediction ---
pub const DEFAULT_NAVIGATION_THRESHOLD: f64 = 0.3;
pub const DEFAULT_INTERACTION_THRESHOLD: f64 = 0.4;
pub const DEFAULT_TEMPORAL_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CRITICALITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_BUNDLE_PROBABILITY: f64 = 0.6;
pub const DEFAULT_BUNDLE_DISCOUNT: f64 = 0.7;
pub const DEFAULT_MAX_BUNDLE_SIZE: usize = 5;
pub const DEFAULT_PREDICTION_CACHE_CAPACITY: u64 = 1_000;
pub const DEFAULT_NAVIGATION_HISTORY_CAPACITY: usize = 100;
pub const DEFAULT_USAGE_HISTORY_CAPACITY: usize = 1_000;

// --- Scheduler ---
pub const DEFAULT_CRITICAL_BATCH_SIZE: usize = 10;
pub const DEFAULT_HIGH_BATCH_SIZE: usize = 6;
pub const DEFAULT_IDLE_BATCH_SIZE: usize = 3;
pub const DEFAULT_HIGH_TIER_DELAY_MS: u64 = 100;
pub const DEFAULT_INTER_BATCH_DELAY_MS: u64 = 50;
pub const DEFAULT_IDLE_FALLBACK_MS: u64 = 1_000;

// --- Storage ---
pub const DEFAULT_STORAGE_NAMESPACE: &str = "attune";

// --- Analytics ---
pub const DEFAULT_ANALYTICS_QUEUE_CAPACITY: usize = 500;
pub const DEFAULT_ANALYTICS_ENABLED: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TRACING_ENABLED: bool = false;
