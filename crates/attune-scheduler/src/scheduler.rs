//! LoadingScheduler: tiered batch execution of predictions.

use std::sync::Arc;
use std::time::Duration;

use attune_core::config::SchedulerConfig;
use attune_core::constants::MAX_CRITICAL_CONCURRENCY;
use attune_core::models::{LoadingPrediction, Priority, RegistrySnapshot, ResourceDescriptor};
use attune_core::traits::{IIdleSignal, ILoadObserver, IResourceLoader};
use attune_observability::tracing_setup::events;
use futures::future::join_all;
use tokio::time::{sleep, Instant};
use tracing::Instrument;

use crate::report::{BatchRecord, ScheduleReport, SchedulerState};

pub struct LoadingScheduler {
    config: SchedulerConfig,
    loader: Arc<dyn IResourceLoader>,
    idle: Option<Arc<dyn IIdleSignal>>,
    observer: Option<Arc<dyn ILoadObserver>>,
}

#[derive(Default)]
struct Tiers<'a> {
    critical: Vec<&'a ResourceDescriptor>,
    high: Vec<&'a ResourceDescriptor>,
    deferred: Vec<(Priority, &'a ResourceDescriptor)>,
}

impl LoadingScheduler {
    pub fn new(config: SchedulerConfig, loader: Arc<dyn IResourceLoader>) -> Self {
        Self {
            config,
            loader,
            idle: None,
            observer: None,
        }
    }

    /// Host idle signal gating the medium and low tiers.
    pub fn with_idle_signal(mut self, idle: Arc<dyn IIdleSignal>) -> Self {
        self.idle = Some(idle);
        self
    }

    /// Receiver for measured load durations of successful loads.
    pub fn with_observer(mut self, observer: Arc<dyn ILoadObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Run one scheduling cycle over `predictions`, resolving descriptors
    /// from `snapshot`.
    pub async fn schedule(
        &self,
        predictions: &[LoadingPrediction],
        snapshot: &RegistrySnapshot,
    ) -> ScheduleReport {
        let span = attune_observability::scheduler_span!(predictions.len());
        self.run_cycle(predictions, snapshot).instrument(span).await
    }

    async fn run_cycle(
        &self,
        predictions: &[LoadingPrediction],
        snapshot: &RegistrySnapshot,
    ) -> ScheduleReport {
        let mut report = ScheduleReport {
            states: vec![SchedulerState::Idle],
            ..Default::default()
        };
        let tiers = self.partition(predictions, snapshot, &mut report);

        if !tiers.critical.is_empty() {
            report.states.push(SchedulerState::BatchingCritical);
            let size = self
                .config
                .critical_batch_size
                .clamp(1, MAX_CRITICAL_CONCURRENCY);
            for chunk in tiers.critical.chunks(size) {
                self.run_batch(Priority::Critical, chunk, &mut report).await;
            }
        }

        if !tiers.high.is_empty() {
            report.states.push(SchedulerState::BatchingHigh);
            sleep(Duration::from_millis(self.config.high_tier_delay_ms)).await;
            let size = self.config.high_batch_size.max(1);
            for (i, chunk) in tiers.high.chunks(size).enumerate() {
                if i > 0 {
                    self.pause_between_batches().await;
                }
                self.run_batch(Priority::High, chunk, &mut report).await;
            }
        }

        if !tiers.deferred.is_empty() {
            report.states.push(SchedulerState::IdleAware);
            self.wait_for_idle().await;
            let size = self.config.idle_batch_size.max(1);
            for (i, chunk) in tiers.deferred.chunks(size).enumerate() {
                if i > 0 {
                    self.pause_between_batches().await;
                }
                // A batch is labelled with the highest tier it carries.
                let tier = chunk
                    .iter()
                    .map(|(p, _)| *p)
                    .max()
                    .unwrap_or(Priority::Low);
                let resources: Vec<&ResourceDescriptor> = chunk.iter().map(|(_, r)| *r).collect();
                self.run_batch(tier, &resources, &mut report).await;
            }
        }

        report.states.push(SchedulerState::Idle);
        tracing::info!(
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            skipped = report.skipped.len(),
            batches = report.batches.len(),
            "scheduling cycle complete"
        );
        report
    }

    /// Split predictions into tiers, dropping unknown ids and anything over
    /// the byte budget. Budget is spent in tier order, then input order.
    fn partition<'a>(
        &self,
        predictions: &[LoadingPrediction],
        snapshot: &'a RegistrySnapshot,
        report: &mut ScheduleReport,
    ) -> Tiers<'a> {
        let mut ordered: Vec<(Priority, &'a ResourceDescriptor)> = Vec::with_capacity(predictions.len());
        for prediction in predictions {
            match snapshot.get(&prediction.resource_id) {
                Some(resource) => ordered.push((prediction.priority, resource)),
                None => {
                    tracing::debug!(resource_id = %prediction.resource_id, "prediction for unregistered resource skipped");
                    report.skipped.push(prediction.resource_id.clone());
                }
            }
        }
        // Stable: keeps input order within a tier.
        ordered.sort_by(|a, b| b.0.cmp(&a.0));

        let mut spent: u64 = 0;
        let mut tiers = Tiers::default();
        for (priority, resource) in ordered {
            if let Some(budget) = self.config.byte_budget {
                if spent.saturating_add(resource.size_bytes) > budget {
                    tracing::debug!(resource_id = %resource.id, budget, spent, "byte budget exceeded");
                    report.skipped.push(resource.id.clone());
                    continue;
                }
                spent += resource.size_bytes;
            }
            match priority {
                Priority::Critical => tiers.critical.push(resource),
                Priority::High => tiers.high.push(resource),
                Priority::Medium | Priority::Low => tiers.deferred.push((priority, resource)),
            }
        }
        tiers
    }

    async fn run_batch(&self, tier: Priority, resources: &[&ResourceDescriptor], report: &mut ScheduleReport) {
        let started_at = Instant::now();
        events::batch_dispatched(tier.as_str(), resources.len());

        let outcomes = join_all(resources.iter().map(|resource| async move {
            let start = Instant::now();
            let result = self.loader.load(resource).await;
            (*resource, result, start.elapsed())
        }))
        .await;

        for (resource, result, elapsed) in outcomes {
            match result {
                Ok(()) => {
                    if let Some(observer) = &self.observer {
                        observer.on_loaded(&resource.id, elapsed.as_secs_f64() * 1000.0);
                    }
                    report.loaded.push(resource.id.clone());
                }
                Err(e) => {
                    let message = e.to_string();
                    events::resource_load_failed(&resource.id, &message);
                    report.failed.push((resource.id.clone(), message));
                }
            }
        }

        report.batches.push(BatchRecord {
            tier,
            resource_ids: resources.iter().map(|r| r.id.clone()).collect(),
            started_at,
        });
    }

    async fn pause_between_batches(&self) {
        sleep(Duration::from_millis(self.config.inter_batch_delay_ms)).await;
    }

    /// Resolve on the host idle signal or after the fallback timeout,
    /// whichever comes first.
    async fn wait_for_idle(&self) {
        let fallback = sleep(Duration::from_millis(self.config.idle_fallback_ms));
        match &self.idle {
            Some(idle) => {
                tokio::select! {
                    _ = idle.wait_for_idle() => {}
                    _ = fallback => {
                        tracing::debug!("idle signal did not arrive, using fallback timeout");
                    }
                }
            }
            None => fallback.await,
        }
    }
}
