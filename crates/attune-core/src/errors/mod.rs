mod analytics_error;
mod attune_error;
mod load_error;
mod storage_error;

pub use analytics_error::AnalyticsError;
pub use attune_error::{AttuneError, AttuneResult};
pub use load_error::LoadError;
pub use storage_error::StorageError;
