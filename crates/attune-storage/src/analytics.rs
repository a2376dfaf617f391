//! Analytics dispatch with a bounded local queue and replay on reconnect.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use attune_core::config::AnalyticsConfig;
use attune_core::errors::{AttuneError, AttuneResult};
use attune_core::models::AnalyticsEvent;
use attune_core::traits::IAnalyticsSink;
use attune_observability::tracing_setup::events;

/// What happened to one emitted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Delivered,
    /// Send failed or no sink is attached; kept for a later flush.
    Queued,
    /// Analytics are turned off in config.
    Disabled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub healthy: bool,
    pub sent: usize,
    /// Events still queued after the flush.
    pub remaining: usize,
}

pub struct AnalyticsDispatcher {
    sink: Option<Arc<dyn IAnalyticsSink>>,
    queue: Mutex<VecDeque<AnalyticsEvent>>,
    capacity: usize,
    enabled: bool,
}

impl AnalyticsDispatcher {
    pub fn new(config: &AnalyticsConfig, sink: Option<Arc<dyn IAnalyticsSink>>) -> Self {
        Self {
            sink,
            queue: Mutex::new(VecDeque::new()),
            capacity: config.queue_capacity.max(1),
            enabled: config.enabled,
        }
    }

    pub async fn emit(&self, event: AnalyticsEvent) -> AttuneResult<DispatchOutcome> {
        if !self.enabled {
            return Ok(DispatchOutcome::Disabled);
        }
        let Some(sink) = &self.sink else {
            self.enqueue(event)?;
            return Ok(DispatchOutcome::Queued);
        };
        match sink.send(&event).await {
            Ok(()) => Ok(DispatchOutcome::Delivered),
            Err(e) => {
                tracing::debug!(kind = event.kind.as_str(), error = %e, "analytics send failed");
                self.enqueue(event)?;
                Ok(DispatchOutcome::Queued)
            }
        }
    }

    /// Replay the queue if the sink reports healthy. Events that fail again
    /// go back to the front, ahead of anything queued meanwhile.
    pub async fn flush(&self) -> AttuneResult<FlushReport> {
        let Some(sink) = &self.sink else {
            return Ok(FlushReport {
                healthy: false,
                sent: 0,
                remaining: self.queue_len()?,
            });
        };
        if !sink.health_check().await {
            tracing::info!("analytics sink unhealthy, keeping queue");
            return Ok(FlushReport {
                healthy: false,
                sent: 0,
                remaining: self.queue_len()?,
            });
        }

        let pending: Vec<AnalyticsEvent> = self.lock()?.drain(..).collect();
        let mut sent = 0;
        let mut failed = Vec::new();
        for event in pending {
            match sink.send(&event).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    tracing::debug!(kind = event.kind.as_str(), error = %e, "analytics replay failed");
                    failed.push(event);
                }
            }
        }

        let mut queue = self.lock()?;
        for event in failed.into_iter().rev() {
            queue.push_front(event);
        }
        while queue.len() > self.capacity {
            queue.pop_front();
        }
        let remaining = queue.len();
        tracing::info!(sent, remaining, "analytics queue flushed");
        Ok(FlushReport {
            healthy: true,
            sent,
            remaining,
        })
    }

    pub fn queue_len(&self) -> AttuneResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Queued events, oldest first, for persistence.
    pub fn export_queue(&self) -> AttuneResult<Vec<AnalyticsEvent>> {
        Ok(self.lock()?.iter().cloned().collect())
    }

    /// Replace the queue with persisted events. Keeps the newest when over capacity.
    pub fn import_queue(&self, events: Vec<AnalyticsEvent>) -> AttuneResult<()> {
        let mut queue = self.lock()?;
        queue.clear();
        let skip = events.len().saturating_sub(self.capacity);
        queue.extend(events.into_iter().skip(skip));
        Ok(())
    }

    pub fn clear(&self) -> AttuneResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn enqueue(&self, event: AnalyticsEvent) -> AttuneResult<()> {
        let mut queue = self.lock()?;
        if queue.len() >= self.capacity {
            if let Some(dropped) = queue.pop_front() {
                tracing::warn!(
                    kind = dropped.kind.as_str(),
                    "analytics queue full, dropping oldest event"
                );
            }
        }
        let kind = event.kind.as_str();
        queue.push_back(event);
        events::analytics_queued(kind, queue.len());
        Ok(())
    }

    fn lock(&self) -> AttuneResult<MutexGuard<'_, VecDeque<AnalyticsEvent>>> {
        self.queue
            .lock()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))
    }
}
