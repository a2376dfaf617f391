//! Namespaced persistence of engine state.
//!
//! Every value is stored as JSON under `<namespace>:<key>`. Loading never
//! fails: a missing key yields the default, an unreadable or corrupt key
//! yields the default plus a degradation event.

use std::sync::Arc;

use attune_core::config::StorageConfig;
use attune_core::constants::{
    KEY_ANALYTICS_QUEUE, KEY_LAST_CATEGORY, KEY_LEARNING_RECORDS, KEY_MODEL_ACCURACY,
};
use attune_core::errors::{AttuneResult, StorageError};
use attune_core::models::{AnalyticsEvent, Category, DegradationEvent, LearningRecord};
use attune_core::traits::IKeyValueStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const COMPONENT: &str = "storage";
const FALLBACK: &str = "defaults";

/// Everything the engine keeps across restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub model_accuracy: Option<f64>,
    pub learning_records: Vec<LearningRecord>,
    pub last_category: Option<Category>,
    pub analytics_queue: Vec<AnalyticsEvent>,
}

/// Result of a load: the state recovered plus any fallbacks taken.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub state: PersistedState,
    pub degradations: Vec<DegradationEvent>,
}

pub struct StateStore {
    store: Arc<dyn IKeyValueStore>,
    namespace: String,
}

impl StateStore {
    pub fn new(store: Arc<dyn IKeyValueStore>, config: &StorageConfig) -> Self {
        Self {
            store,
            namespace: config.namespace.clone(),
        }
    }

    /// Fully qualified key, e.g. `attune:model_accuracy`.
    pub fn key(&self, name: &str) -> String {
        format!("{}:{}", self.namespace, name)
    }

    pub fn load(&self) -> LoadOutcome {
        let mut degradations = Vec::new();
        let state = PersistedState {
            model_accuracy: self.read(KEY_MODEL_ACCURACY, &mut degradations),
            learning_records: self
                .read(KEY_LEARNING_RECORDS, &mut degradations)
                .unwrap_or_default(),
            last_category: self.read(KEY_LAST_CATEGORY, &mut degradations),
            analytics_queue: self
                .read(KEY_ANALYTICS_QUEUE, &mut degradations)
                .unwrap_or_default(),
        };
        tracing::debug!(
            namespace = %self.namespace,
            records = state.learning_records.len(),
            queued = state.analytics_queue.len(),
            fallbacks = degradations.len(),
            "state loaded"
        );
        LoadOutcome { state, degradations }
    }

    /// Write every key, even after one fails. Returns the first failure.
    pub fn persist(&self, state: &PersistedState) -> AttuneResult<()> {
        let results = [
            match state.model_accuracy {
                Some(accuracy) => self.write(KEY_MODEL_ACCURACY, &accuracy),
                None => self.remove(KEY_MODEL_ACCURACY),
            },
            self.write(KEY_LEARNING_RECORDS, &state.learning_records),
            match state.last_category {
                Some(category) => self.write(KEY_LAST_CATEGORY, &category),
                None => self.remove(KEY_LAST_CATEGORY),
            },
            self.write(KEY_ANALYTICS_QUEUE, &state.analytics_queue),
        ];

        let mut failed = 0;
        let mut first_err = None;
        for err in results.into_iter().filter_map(Result::err) {
            failed += 1;
            first_err.get_or_insert(err);
        }
        match first_err {
            Some(err) => {
                tracing::warn!(failed, error = %err, "state persist incomplete");
                Err(err)
            }
            None => Ok(()),
        }
    }

    pub fn save_last_category(&self, category: Category) -> AttuneResult<()> {
        self.write(KEY_LAST_CATEGORY, &category)
    }

    /// Remove every key this store owns.
    pub fn clear(&self) -> AttuneResult<()> {
        for name in [
            KEY_MODEL_ACCURACY,
            KEY_LEARNING_RECORDS,
            KEY_LAST_CATEGORY,
            KEY_ANALYTICS_QUEUE,
        ] {
            self.store.remove(&self.key(name))?;
        }
        Ok(())
    }

    fn write<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> AttuneResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(&self.key(name), &raw)?;
        Ok(())
    }

    fn remove(&self, name: &str) -> AttuneResult<()> {
        self.store.remove(&self.key(name))?;
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, name: &str, degradations: &mut Vec<DegradationEvent>) -> Option<T> {
        let key = self.key(name);
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "state read failed, using default");
                degradations.push(DegradationEvent::now(COMPONENT, e.to_string(), FALLBACK));
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                let err = StorageError::CorruptValue {
                    key: key.clone(),
                    details: e.to_string(),
                };
                tracing::warn!(key = %key, error = %err, "corrupt state value, using default");
                degradations.push(DegradationEvent::now(COMPONENT, err.to_string(), FALLBACK));
                None
            }
        }
    }
}
