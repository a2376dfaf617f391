//! Feedback / learning loop.
//!
//! Keeps the last N learning records in a ring buffer and maintains the
//! model accuracy that scales every future confidence value:
//!
//! `accuracy' = clamp(accuracy + (mean_satisfaction_normalized - 0.5) * rate, 0, max)`
//!
//! Past recommendations are never touched.

use std::collections::VecDeque;
use std::sync::Mutex;

use attune_core::config::RecommendationConfig;
use attune_core::errors::{AttuneError, AttuneResult};
use attune_core::models::{Feedback, LearningRecord};
use serde::{Deserialize, Serialize};

/// Snapshot of the loop's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningStats {
    pub model_accuracy: f64,
    pub buffered_records: usize,
    /// Mean normalized satisfaction over the buffer, 0.0 when empty.
    pub mean_satisfaction: f64,
}

#[derive(Debug)]
struct LearningState {
    records: VecDeque<LearningRecord>,
    accuracy: f64,
}

pub struct LearningLoop {
    config: RecommendationConfig,
    state: Mutex<LearningState>,
}

impl LearningLoop {
    pub fn new(config: RecommendationConfig) -> Self {
        let capacity = config.learning_buffer_capacity.max(1);
        let accuracy = config.initial_accuracy.clamp(0.0, config.max_accuracy);
        Self {
            config,
            state: Mutex::new(LearningState {
                records: VecDeque::with_capacity(capacity),
                accuracy,
            }),
        }
    }

    /// Append a record and recompute accuracy. Returns the new accuracy.
    pub fn record(&self, feedback: &Feedback) -> AttuneResult<f64> {
        let _span = attune_observability::learning_span!(feedback.session_id).entered();
        let record = LearningRecord::from_feedback(feedback);
        let satisfaction = record.satisfaction;

        let mut state = self.lock()?;
        push_bounded(&mut state.records, record, self.capacity());
        if self.config.learning_enabled {
            let mean = mean_satisfaction(&state.records);
            state.accuracy = next_accuracy(
                state.accuracy,
                mean,
                self.config.learning_rate,
                self.config.max_accuracy,
            );
        }
        let accuracy = state.accuracy;
        drop(state);

        attune_observability::tracing_setup::events::feedback_recorded(
            &feedback.session_id,
            satisfaction,
            accuracy,
        );
        Ok(accuracy)
    }

    pub fn accuracy(&self) -> AttuneResult<f64> {
        Ok(self.lock()?.accuracy)
    }

    pub fn stats(&self) -> AttuneResult<LearningStats> {
        let state = self.lock()?;
        Ok(LearningStats {
            model_accuracy: state.accuracy,
            buffered_records: state.records.len(),
            mean_satisfaction: mean_satisfaction(&state.records),
        })
    }

    /// Buffered records, oldest first.
    pub fn records(&self) -> AttuneResult<Vec<LearningRecord>> {
        Ok(self.lock()?.records.iter().cloned().collect())
    }

    /// Restore persisted state. Accuracy is clamped, records beyond the
    /// buffer capacity drop their oldest entries.
    pub fn restore(&self, accuracy: f64, records: Vec<LearningRecord>) -> AttuneResult<()> {
        let capacity = self.capacity();
        let mut state = self.lock()?;
        state.accuracy = if accuracy.is_finite() {
            accuracy.clamp(0.0, self.config.max_accuracy)
        } else {
            self.config.initial_accuracy
        };
        state.records.clear();
        for record in records {
            push_bounded(&mut state.records, record, capacity);
        }
        Ok(())
    }

    /// Back to the initial accuracy with an empty buffer.
    pub fn reset(&self) -> AttuneResult<()> {
        let mut state = self.lock()?;
        state.records.clear();
        state.accuracy = self.config.initial_accuracy.clamp(0.0, self.config.max_accuracy);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.config.learning_buffer_capacity.max(1)
    }

    fn lock(&self) -> AttuneResult<std::sync::MutexGuard<'_, LearningState>> {
        self.state
            .lock()
            .map_err(|e| AttuneError::ConcurrencyError(e.to_string()))
    }
}

fn push_bounded(records: &mut VecDeque<LearningRecord>, record: LearningRecord, capacity: usize) {
    while records.len() >= capacity {
        records.pop_front();
    }
    records.push_back(record);
}

fn mean_satisfaction(records: &VecDeque<LearningRecord>) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records
        .iter()
        .map(|r| r.outcome.satisfaction_normalized)
        .sum::<f64>()
        / records.len() as f64
}

/// One step of the accuracy update rule.
pub fn next_accuracy(current: f64, mean_satisfaction: f64, rate: f64, max: f64) -> f64 {
    (current + (mean_satisfaction - 0.5) * rate).clamp(0.0, max)
}
