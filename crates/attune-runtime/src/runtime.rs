//! AttuneRuntime: owns all engines and collaborators for one host context.

use std::sync::{Arc, Mutex, MutexGuard};

use attune_analysis::{ContentInput, ContextInput};
use attune_core::config::AttuneConfig;
use attune_core::errors::{AttuneError, AttuneResult};
use attune_core::models::{
    AnalyticsEvent, AnalyticsEventKind, Category, DegradationEvent, Feedback, LoadingPrediction,
    PredictionContext, Recommendation, ResourceDescriptor, ResourceMetricsUpdate,
};
use attune_core::traits::IKeyValueStore;
use attune_observability::{DegradationTracker, TrackedDegradation};
use attune_prediction::PredictionEngine;
use attune_recommend::RecommendationEngine;
use attune_scheduler::{LoadingScheduler, ScheduleReport};
use attune_storage::{
    AnalyticsDispatcher, DispatchOutcome, FlushReport, MemoryKeyValueStore, PersistedState,
    StateStore,
};
use chrono::Utc;
use serde_json::json;

use crate::options::RuntimeOptions;
use crate::stats::RuntimeStats;

const ANALYTICS_COMPONENT: &str = "analytics";
const STORAGE_COMPONENT: &str = "storage";

pub struct AttuneRuntime {
    config: AttuneConfig,
    recommendation: RecommendationEngine,
    prediction: Arc<PredictionEngine>,
    scheduler: Option<LoadingScheduler>,
    state: StateStore,
    analytics: AnalyticsDispatcher,
    degradation: Mutex<DegradationTracker>,
    last_category: Mutex<Option<Category>>,
    user_id: Option<String>,
}

impl AttuneRuntime {
    /// Build a runtime and restore persisted state. Storage problems never
    /// fail construction; only a malformed config does.
    pub fn new(opts: RuntimeOptions) -> AttuneResult<Self> {
        let config = match &opts.config_toml {
            Some(toml_str) => AttuneConfig::from_toml(toml_str)?,
            None => AttuneConfig::default(),
        };

        if config.observability.tracing_enabled {
            attune_observability::tracing_setup::init_tracing_with_filter(&config.observability.log_level);
        }

        let store: Arc<dyn IKeyValueStore> = match opts.store {
            Some(store) => store,
            None => Arc::new(MemoryKeyValueStore::new()),
        };
        let state = StateStore::new(store, &config.storage);

        let recommendation = RecommendationEngine::new(config.recommendation.clone());
        let prediction = Arc::new(PredictionEngine::new(&config.prediction));
        let scheduler = opts.loader.map(|loader| {
            let mut scheduler = LoadingScheduler::new(config.scheduler.clone(), loader)
                .with_observer(prediction.clone());
            if let Some(idle) = opts.idle_signal {
                scheduler = scheduler.with_idle_signal(idle);
            }
            scheduler
        });
        let analytics = AnalyticsDispatcher::new(&config.analytics, opts.analytics_sink);

        let runtime = Self {
            config,
            recommendation,
            prediction,
            scheduler,
            state,
            analytics,
            degradation: Mutex::new(DegradationTracker::new()),
            last_category: Mutex::new(None),
            user_id: opts.user_id,
        };
        runtime.restore()?;
        Ok(runtime)
    }

    pub fn config(&self) -> &AttuneConfig {
        &self.config
    }

    pub fn recommendation_engine(&self) -> &RecommendationEngine {
        &self.recommendation
    }

    pub fn prediction_engine(&self) -> &PredictionEngine {
        &self.prediction
    }

    // ---- recommendation ----

    pub async fn recommend(
        &self,
        content: &ContentInput,
        context: &ContextInput,
        force_refresh: bool,
    ) -> AttuneResult<Recommendation> {
        self.recommendation
            .recommend_input(content, context, force_refresh)
            .await
    }

    /// Record that the host applied `rec`.
    pub async fn apply(&self, rec: &Recommendation, session_id: &str) -> AttuneResult<()> {
        *self.lock_last_category()? = Some(rec.category);
        match self.state.save_last_category(rec.category) {
            Ok(()) => self.recover(STORAGE_COMPONENT)?,
            Err(e) => self.degrade(STORAGE_COMPONENT, e.to_string(), "in-memory state")?,
        }
        self.emit(
            AnalyticsEventKind::ThemeApplied,
            session_id,
            json!({
                "recommendation_id": rec.id,
                "category": rec.category.id(),
                "confidence": rec.confidence,
                "estimated_apply_cost_ms": rec.estimated_apply_cost_ms,
                "accessibility_overrides": rec.accessibility_overrides.len(),
            }),
        )
        .await
    }

    /// Feed satisfaction back, persist, and report for training. Returns
    /// the updated model accuracy.
    pub async fn record_feedback(&self, feedback: &Feedback) -> AttuneResult<f64> {
        let accuracy = self.recommendation.record_feedback(feedback)?;
        self.persist_or_degrade()?;
        let category = *self.lock_last_category()?;
        self.emit(
            AnalyticsEventKind::AiTraining,
            &feedback.session_id,
            json!({
                "category": category.map(Category::id),
                "satisfaction": feedback.satisfaction,
                "usage_duration_secs": feedback.usage_duration_secs,
                "interactions": feedback.interactions,
                "task_completed": feedback.task_completed,
                "model_accuracy": accuracy,
            }),
        )
        .await?;
        Ok(accuracy)
    }

    // ---- prediction ----

    pub fn register_resource(&self, descriptor: ResourceDescriptor) -> AttuneResult<()> {
        self.prediction.register_resource(descriptor)
    }

    /// Returns `false` for an unknown id.
    pub fn update_resource_metrics(&self, id: &str, update: &ResourceMetricsUpdate) -> AttuneResult<bool> {
        self.prediction.update_metrics(id, update, Utc::now())
    }

    pub fn record_navigation(&self, path: Vec<String>) -> AttuneResult<bool> {
        self.prediction.record_navigation(path)
    }

    pub fn record_usage(&self, resource_id: &str) -> AttuneResult<()> {
        self.prediction.record_usage(resource_id, Utc::now())
    }

    pub fn predict(&self, ctx: &PredictionContext) -> AttuneResult<Vec<LoadingPrediction>> {
        self.prediction.predict(ctx)
    }

    /// Predict for `ctx` and load the results through the scheduler.
    pub async fn preload(&self, ctx: &PredictionContext) -> AttuneResult<ScheduleReport> {
        let scheduler = self
            .scheduler
            .as_ref()
            .ok_or_else(|| AttuneError::ConfigError("no resource loader configured".into()))?;

        let predictions = self.prediction.predict(ctx)?;
        let snapshot = self.prediction.snapshot()?;
        let report = scheduler.schedule(&predictions, &snapshot).await;

        self.emit(
            AnalyticsEventKind::PerformanceMetric,
            &ctx.session_id,
            json!({
                "route": ctx.current_route,
                "predicted": predictions.len(),
                "loaded": report.loaded.len(),
                "failed": report.failed.len(),
                "skipped": report.skipped.len(),
                "batches": report.batches.len(),
            }),
        )
        .await?;
        Ok(report)
    }

    // ---- persistence & analytics ----

    /// Write learning state, last category, and the analytics queue. A clean
    /// write closes any open storage degradation.
    pub fn persist(&self) -> AttuneResult<()> {
        let learning = self.recommendation.learning();
        let state = PersistedState {
            model_accuracy: Some(learning.accuracy()?),
            learning_records: learning.records()?,
            last_category: *self.lock_last_category()?,
            analytics_queue: self.analytics.export_queue()?,
        };
        self.state.persist(&state)?;
        self.recover(STORAGE_COMPONENT)
    }

    /// Replay queued analytics if the sink is healthy.
    pub async fn flush_analytics(&self) -> AttuneResult<FlushReport> {
        let report = self.analytics.flush().await?;
        if report.healthy && report.remaining == 0 {
            self.recover(ANALYTICS_COMPONENT)?;
        }
        Ok(report)
    }

    pub fn stats(&self) -> AttuneResult<RuntimeStats> {
        Ok(RuntimeStats {
            learning: self.recommendation.stats()?,
            recommendation_cache_hit_rate: self.recommendation.cache().hit_rate(),
            prediction_cache_hit_rate: self.prediction.cache().hit_rate(),
            registered_resources: self.prediction.registry().len()?,
            queued_analytics_events: self.analytics.queue_len()?,
            active_degradations: self.lock_degradation()?.active_degradations().len(),
            last_category: *self.lock_last_category()?,
        })
    }

    pub fn degradations(&self) -> AttuneResult<Vec<TrackedDegradation>> {
        Ok(self.lock_degradation()?.entries().cloned().collect())
    }

    /// Drop every cached, learned, registered, queued, and persisted value.
    pub fn reset(&self) -> AttuneResult<()> {
        self.recommendation.reset()?;
        self.prediction.reset()?;
        self.analytics.clear()?;
        *self.lock_last_category()? = None;
        self.lock_degradation()?.clear();
        self.state.clear()?;
        tracing::info!("runtime reset");
        Ok(())
    }

    fn restore(&self) -> AttuneResult<()> {
        let outcome = self.state.load();
        {
            let mut tracker = self.lock_degradation()?;
            for event in outcome.degradations {
                tracker.record(event);
            }
        }

        let restored = outcome.state;
        if restored.model_accuracy.is_some() || !restored.learning_records.is_empty() {
            let accuracy = restored
                .model_accuracy
                .unwrap_or(self.config.recommendation.initial_accuracy);
            self.recommendation
                .learning()
                .restore(accuracy, restored.learning_records)?;
        }
        *self.lock_last_category()? = restored.last_category;
        self.analytics.import_queue(restored.analytics_queue)?;
        Ok(())
    }

    fn persist_or_degrade(&self) -> AttuneResult<()> {
        match self.persist() {
            Ok(()) => Ok(()),
            Err(e @ AttuneError::ConcurrencyError(_)) => Err(e),
            Err(e) => self.degrade(STORAGE_COMPONENT, e.to_string(), "in-memory state"),
        }
    }

    async fn emit(
        &self,
        kind: AnalyticsEventKind,
        session_id: &str,
        payload: serde_json::Value,
    ) -> AttuneResult<()> {
        let event = AnalyticsEvent::new(kind, self.user_id.clone(), session_id, payload);
        if self.analytics.emit(event).await? == DispatchOutcome::Queued {
            self.degrade(ANALYTICS_COMPONENT, "sink unreachable".to_string(), "local queue")?;
        }
        Ok(())
    }

    fn degrade(&self, component: &str, failure: String, fallback: &str) -> AttuneResult<()> {
        self.lock_degradation()?
            .record(DegradationEvent::now(component, failure, fallback));
        Ok(())
    }

    fn recover(&self, component: &str) -> AttuneResult<()> {
        self.lock_degradation()?.mark_recovered(component);
        Ok(())
    }

    fn lock_degradation(&self) -> AttuneResult<MutexGuard<'_, DegradationTracker>> {
        self.degradation
            .lock()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))
    }

    fn lock_last_category(&self) -> AttuneResult<MutexGuard<'_, Option<Category>>> {
        self.last_category
            .lock()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))
    }
}
