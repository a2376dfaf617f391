use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of structured events sent to the analytics sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsEventKind {
    ThemeApplied,
    UserInteraction,
    PerformanceMetric,
    AiTraining,
}

impl AnalyticsEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThemeApplied => "theme_applied",
            Self::UserInteraction => "user_interaction",
            Self::PerformanceMetric => "performance_metric",
            Self::AiTraining => "ai_training",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub kind: AnalyticsEventKind,
    /// `None` for anonymous users.
    pub user_id: Option<String>,
    pub session_id: String,
    pub payload: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(
        kind: AnalyticsEventKind,
        user_id: Option<String>,
        session_id: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            kind,
            user_id,
            session_id: session_id.into(),
            payload,
            timestamp: Utc::now(),
        }
    }

    /// User id or the literal `anonymous`.
    pub fn user_label(&self) -> &str {
        self.user_id.as_deref().unwrap_or("anonymous")
    }
}
