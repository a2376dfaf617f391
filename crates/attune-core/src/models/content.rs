use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Overall polarity of analyzed content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl Sentiment {
    /// Priority order used to break count ties.
    pub const PRIORITY: [Sentiment; 3] = [Self::Neutral, Self::Positive, Self::Negative];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// Energy conveyed by analyzed content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    pub const PRIORITY: [EnergyLevel; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Dominant emotional tone. The first variant is the default bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTone {
    #[default]
    Focused,
    Calm,
    Energetic,
    Inspiring,
    Playful,
}

impl EmotionalTone {
    pub const PRIORITY: [EmotionalTone; 5] = [
        Self::Focused,
        Self::Calm,
        Self::Energetic,
        Self::Inspiring,
        Self::Playful,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Focused => "focused",
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Inspiring => "inspiring",
            Self::Playful => "playful",
        }
    }
}

/// Community-philosophy dimensions scored in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhilosophyDimension {
    Reciprocity,
    CommonGood,
    Cooperation,
    Sustainability,
}

impl PhilosophyDimension {
    pub const ALL: [PhilosophyDimension; 4] = [
        Self::Reciprocity,
        Self::CommonGood,
        Self::Cooperation,
        Self::Sustainability,
    ];
}

/// Bounded feature vector extracted from a piece of content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentFeatures {
    pub sentiment: Sentiment,
    pub energy: EnergyLevel,
    /// Topic taxonomy labels present in the content.
    pub topics: BTreeSet<String>,
    /// Score per philosophy dimension, each in [0, 1].
    pub philosophy_scores: BTreeMap<PhilosophyDimension, f64>,
    pub emotional_tone: EmotionalTone,
}

impl ContentFeatures {
    /// Score for a philosophy dimension (0.0 when absent).
    pub fn philosophy(&self, dimension: PhilosophyDimension) -> f64 {
        self.philosophy_scores.get(&dimension).copied().unwrap_or(0.0)
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.contains(topic)
    }
}
