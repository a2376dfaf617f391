use async_trait::async_trait;

use crate::errors::AnalyticsError;
use crate::models::AnalyticsEvent;

/// External analytics/event service.
#[async_trait]
pub trait IAnalyticsSink: Send + Sync {
    async fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError>;

    /// `true` when the sink is reachable and queued events can be replayed.
    async fn health_check(&self) -> bool;
}
