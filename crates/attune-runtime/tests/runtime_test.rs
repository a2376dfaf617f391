//! End-to-end runtime tests with in-memory collaborators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use attune_analysis::{ContentInput, ContextInput};
use attune_core::errors::{AnalyticsError, AttuneError, LoadError, StorageError};
use attune_core::models::{
    ActivityLevel, AnalyticsEvent, AnalyticsEventKind, Category, Feedback, PredictionContext,
    Priority, ResourceDescriptor, TimeBucket, UserContext,
};
use attune_core::traits::{IAnalyticsSink, IKeyValueStore, IResourceLoader};
use attune_runtime::{AttuneRuntime, RuntimeOptions};
use attune_storage::MemoryKeyValueStore;

#[derive(Default)]
struct SwitchableSink {
    offline: AtomicBool,
    delivered: Mutex<Vec<AnalyticsEvent>>,
}

#[async_trait]
impl IAnalyticsSink for SwitchableSink {
    async fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AnalyticsError::SinkUnreachable {
                reason: "offline".into(),
            });
        }
        self.delivered.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        !self.offline.load(Ordering::SeqCst)
    }
}

impl SwitchableSink {
    fn kinds(&self) -> Vec<AnalyticsEventKind> {
        self.delivered.lock().unwrap().iter().map(|e| e.kind).collect()
    }
}

struct SlowLoader;

#[async_trait]
impl IResourceLoader for SlowLoader {
    async fn load(&self, resource: &ResourceDescriptor) -> Result<(), LoadError> {
        tokio::time::sleep(Duration::from_millis(30)).await;
        if resource.id == "broken" {
            return Err(LoadError::TimedOut {
                resource_id: resource.id.clone(),
                elapsed_ms: 30,
            });
        }
        Ok(())
    }
}

/// Rejects every write while `failing` is set.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryKeyValueStore,
    failing: AtomicBool,
}

impl IKeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected {
                key: key.into(),
                reason: "quota exceeded".into(),
            });
        }
        self.inner.set(key, value)
    }
    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

fn options(store: &MemoryKeyValueStore, sink: &Arc<SwitchableSink>) -> RuntimeOptions {
    RuntimeOptions {
        store: Some(Arc::new(store.clone())),
        analytics_sink: Some(sink.clone()),
        user_id: Some("u-1".into()),
        ..Default::default()
    }
}

fn energetic() -> (ContentInput, ContextInput) {
    (
        ContentInput::from("Exciting dynamic powerful action ahead"),
        ContextInput::Snapshot(UserContext {
            activity_level: ActivityLevel::High,
            time_bucket: TimeBucket::Evening,
            ..Default::default()
        }),
    )
}

fn feedback(satisfaction: u8) -> Feedback {
    Feedback {
        session_id: "s1".into(),
        satisfaction,
        usage_duration_secs: 120.0,
        interactions: 10,
        task_completed: true,
    }
}

#[tokio::test]
async fn apply_records_category_and_reports_theme() {
    let store = MemoryKeyValueStore::new();
    let sink = Arc::new(SwitchableSink::default());
    let runtime = AttuneRuntime::new(options(&store, &sink)).unwrap();

    let (content, context) = energetic();
    let rec = runtime.recommend(&content, &context, false).await.unwrap();
    assert_eq!(rec.category, Category::ActionOriented);

    runtime.apply(&rec, "s1").await.unwrap();
    assert_eq!(runtime.stats().unwrap().last_category, Some(Category::ActionOriented));
    assert_eq!(
        store.get("attune:last_category").unwrap().as_deref(),
        Some("\"action-oriented\"")
    );

    let delivered = sink.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].kind, AnalyticsEventKind::ThemeApplied);
    assert_eq!(delivered[0].user_label(), "u-1");
    assert_eq!(delivered[0].payload["recommendation_id"], rec.id.as_str());
}

#[tokio::test]
async fn learning_state_survives_restart() {
    let store = MemoryKeyValueStore::new();
    let sink = Arc::new(SwitchableSink::default());

    let accuracy = {
        let runtime = AttuneRuntime::new(options(&store, &sink)).unwrap();
        let (content, context) = energetic();
        let rec = runtime.recommend(&content, &context, false).await.unwrap();
        runtime.apply(&rec, "s1").await.unwrap();
        let accuracy = runtime.record_feedback(&feedback(5)).await.unwrap();
        assert!(accuracy > 0.75);
        accuracy
    };
    assert!(sink.kinds().contains(&AnalyticsEventKind::AiTraining));

    let restarted = AttuneRuntime::new(options(&store, &sink)).unwrap();
    let stats = restarted.stats().unwrap();
    assert_eq!(stats.learning.model_accuracy, accuracy);
    assert_eq!(stats.learning.buffered_records, 1);
    assert_eq!(stats.last_category, Some(Category::ActionOriented));
    assert_eq!(stats.active_degradations, 0);
}

#[tokio::test]
async fn offline_sink_queues_degrades_and_recovers() {
    let store = MemoryKeyValueStore::new();
    let sink = Arc::new(SwitchableSink::default());
    sink.offline.store(true, Ordering::SeqCst);
    let runtime = AttuneRuntime::new(options(&store, &sink)).unwrap();

    let (content, context) = energetic();
    let rec = runtime.recommend(&content, &context, false).await.unwrap();
    runtime.apply(&rec, "s1").await.unwrap();
    runtime.apply(&rec, "s1").await.unwrap();

    let stats = runtime.stats().unwrap();
    assert_eq!(stats.queued_analytics_events, 2);
    assert_eq!(stats.active_degradations, 1);

    runtime.persist().unwrap();
    let restarted = AttuneRuntime::new(options(&store, &sink)).unwrap();
    assert_eq!(restarted.stats().unwrap().queued_analytics_events, 2);

    sink.offline.store(false, Ordering::SeqCst);
    let report = runtime.flush_analytics().await.unwrap();
    assert_eq!(report.sent, 2);
    assert_eq!(report.remaining, 0);
    assert_eq!(runtime.stats().unwrap().active_degradations, 0);
    assert_eq!(runtime.degradations().unwrap().len(), 1);
}

#[tokio::test]
async fn corrupt_storage_does_not_block_startup() {
    let store = MemoryKeyValueStore::new();
    store.set("attune:model_accuracy", "\"high\"").unwrap();
    let sink = Arc::new(SwitchableSink::default());

    let runtime = AttuneRuntime::new(options(&store, &sink)).unwrap();
    let stats = runtime.stats().unwrap();
    assert_eq!(stats.learning.model_accuracy, 0.75);
    assert_eq!(stats.active_degradations, 1);
    assert_eq!(runtime.degradations().unwrap()[0].event.component, "storage");
}

#[tokio::test]
async fn repeated_write_failures_share_one_degradation_until_recovery() {
    let store = Arc::new(FlakyStore::default());
    store.failing.store(true, Ordering::SeqCst);
    let sink = Arc::new(SwitchableSink::default());
    let runtime = AttuneRuntime::new(RuntimeOptions {
        store: Some(store.clone()),
        analytics_sink: Some(sink.clone()),
        ..Default::default()
    })
    .unwrap();

    for _ in 0..50 {
        runtime.record_feedback(&feedback(4)).await.unwrap();
    }
    let degradations = runtime.degradations().unwrap();
    assert_eq!(degradations.len(), 1);
    assert_eq!(degradations[0].event.component, "storage");
    assert_eq!(degradations[0].occurrences, 50);
    assert_eq!(runtime.stats().unwrap().active_degradations, 1);

    store.failing.store(false, Ordering::SeqCst);
    runtime.persist().unwrap();
    assert_eq!(runtime.stats().unwrap().active_degradations, 0);
    assert!(store.inner.get("attune:model_accuracy").unwrap().is_some());

    store.failing.store(true, Ordering::SeqCst);
    runtime.record_feedback(&feedback(4)).await.unwrap();
    assert_eq!(runtime.stats().unwrap().active_degradations, 1);
    assert_eq!(runtime.degradations().unwrap().len(), 2);
}

#[tokio::test]
async fn preload_without_loader_is_a_config_error() {
    let runtime = AttuneRuntime::new(RuntimeOptions::default()).unwrap();
    let ctx = PredictionContext::at("/home", "s1", chrono::Utc::now());
    let err = runtime.preload(&ctx).await.unwrap_err();
    assert!(matches!(err, AttuneError::ConfigError(_)));
}

#[tokio::test(start_paused = true)]
async fn preload_loads_predictions_and_feeds_back_load_time() {
    let sink = Arc::new(SwitchableSink::default());
    let runtime = AttuneRuntime::new(RuntimeOptions {
        loader: Some(Arc::new(SlowLoader)),
        analytics_sink: Some(sink.clone()),
        ..Default::default()
    })
    .unwrap();

    let mut hero = ResourceDescriptor::new("hero", "Hero", "/home");
    hero.criticality_score = 0.9;
    runtime.register_resource(hero).unwrap();
    let mut broken = ResourceDescriptor::new("broken", "Broken", "/home");
    broken.criticality_score = 0.8;
    runtime.register_resource(broken).unwrap();

    let ctx = PredictionContext::at("/home", "s1", chrono::Utc::now());
    let predictions = runtime.predict(&ctx).unwrap();
    assert!(predictions.iter().any(|p| p.resource_id == "hero" && p.priority == Priority::Critical));

    let report = runtime.preload(&ctx).await.unwrap();
    assert!(report.loaded.contains(&"hero".to_string()));
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "broken");

    let hero = runtime.prediction_engine().registry().get("hero").unwrap().unwrap();
    assert!((hero.last_load_time_ms - 30.0).abs() < 1e-6);
    assert_eq!(sink.kinds(), vec![AnalyticsEventKind::PerformanceMetric]);
}

#[tokio::test]
async fn reset_clears_everything() {
    let store = MemoryKeyValueStore::new();
    let sink = Arc::new(SwitchableSink::default());
    let runtime = AttuneRuntime::new(options(&store, &sink)).unwrap();

    let (content, context) = energetic();
    let rec = runtime.recommend(&content, &context, false).await.unwrap();
    runtime.apply(&rec, "s1").await.unwrap();
    runtime.record_feedback(&feedback(1)).await.unwrap();
    runtime
        .register_resource(ResourceDescriptor::new("a", "A", "/"))
        .unwrap();

    runtime.reset().unwrap();
    let stats = runtime.stats().unwrap();
    assert_eq!(stats.learning.buffered_records, 0);
    assert_eq!(stats.learning.model_accuracy, 0.75);
    assert_eq!(stats.registered_resources, 0);
    assert!(stats.last_category.is_none());
    assert!(store.is_empty());
}

#[test]
fn malformed_config_is_rejected() {
    let err = AttuneRuntime::new(RuntimeOptions {
        config_toml: Some("[prediction]\ncache_capacity = \"lots\"".into()),
        ..Default::default()
    })
    .err()
    .unwrap();
    assert!(matches!(err, AttuneError::ConfigError(_)));
}

#[test]
fn config_sections_flow_into_engines() {
    let runtime = AttuneRuntime::new(RuntimeOptions {
        config_toml: Some("[prediction]\ndisabled_strategies = [\"bundle\"]\n".into()),
        ..Default::default()
    })
    .unwrap();
    assert!(runtime.config().prediction.disabled_strategies.contains(&"bundle".to_string()));
    assert_eq!(
        runtime.prediction_engine().strategy_names().unwrap().len(),
        5
    );
}
