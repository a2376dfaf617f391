use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SATISFACTION, MIN_SATISFACTION};

/// Post-hoc satisfaction signal for an applied recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub session_id: String,
    /// Rating in 1..=5. Out-of-range values are clamped.
    pub satisfaction: u8,
    pub usage_duration_secs: f64,
    pub interactions: u32,
    pub task_completed: bool,
}

/// Outcome metrics derived from a feedback event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningOutcome {
    /// Interactions per second of usage.
    pub engagement_rate: f64,
    /// 1.0 if the task was completed, else 0.0.
    pub completion_score: f64,
    /// Satisfaction mapped onto [0, 1]; 1 → 0.0, 5 → 1.0.
    pub satisfaction_normalized: f64,
}

/// One entry of the learning ring buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningRecord {
    pub session_id: String,
    pub satisfaction: u8,
    pub usage_duration_secs: f64,
    pub interaction_count: u32,
    pub task_completed: bool,
    pub outcome: LearningOutcome,
    pub recorded_at: DateTime<Utc>,
}

impl LearningRecord {
    /// Build a record from raw feedback, clamping and deriving outcome metrics.
    pub fn from_feedback(feedback: &Feedback) -> Self {
        let satisfaction = feedback.satisfaction.clamp(MIN_SATISFACTION, MAX_SATISFACTION);
        let usage = if feedback.usage_duration_secs.is_finite() {
            feedback.usage_duration_secs.max(0.0)
        } else {
            0.0
        };
        let outcome = LearningOutcome {
            engagement_rate: feedback.interactions as f64 / usage.max(1.0),
            completion_score: if feedback.task_completed { 1.0 } else { 0.0 },
            satisfaction_normalized: f64::from(satisfaction - MIN_SATISFACTION)
                / f64::from(MAX_SATISFACTION - MIN_SATISFACTION),
        };
        Self {
            session_id: feedback.session_id.clone(),
            satisfaction,
            usage_duration_secs: usage,
            interaction_count: feedback.interactions,
            task_completed: feedback.task_completed,
            outcome,
            recorded_at: Utc::now(),
        }
    }
}
