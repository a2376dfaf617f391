//! Tagged inputs accepted by the engine entry points.

use attune_core::models::{ContentFeatures, UserContext};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::EnvironmentSignals;

/// Content to analyze.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentInput {
    /// Raw text, tokenized and scored.
    Text(String),
    /// Features computed elsewhere, used as-is.
    Features(ContentFeatures),
    /// No content: default features.
    #[default]
    Empty,
}

impl ContentInput {
    /// Resolve to a feature vector.
    pub fn features(&self) -> ContentFeatures {
        match self {
            Self::Text(text) => crate::content::analyze(text),
            Self::Features(features) => features.clone(),
            Self::Empty => ContentFeatures::default(),
        }
    }
}

impl From<&str> for ContentInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// User context source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContextInput {
    /// A snapshot already assembled by the caller.
    Snapshot(UserContext),
    /// Raw host signals to collect from.
    Signals(EnvironmentSignals),
    /// No signals at all: every field takes its default.
    #[default]
    Default,
}

impl ContextInput {
    /// Resolve to an owned snapshot taken at `now`.
    pub fn snapshot(&self, now: DateTime<Utc>) -> UserContext {
        match self {
            Self::Snapshot(ctx) => ctx.clone(),
            Self::Signals(signals) => crate::context::collect(signals, now),
            Self::Default => crate::context::collect(&EnvironmentSignals::default(), now),
        }
    }
}
