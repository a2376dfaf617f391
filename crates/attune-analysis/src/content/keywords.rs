//! Fixed keyword tables. Matching is exact, on lowercased tokens.

use attune_core::models::{EmotionalTone, EnergyLevel, PhilosophyDimension, Sentiment};

pub const POSITIVE: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "harmony", "love", "happy", "ayni",
];
pub const NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "hate", "conflict", "angry", "sad", "broken",
];

pub const HIGH_ENERGY: &[&str] = &[
    "action", "energy", "exciting", "dynamic", "powerful", "transform", "intense", "fast", "boost",
];
pub const MEDIUM_ENERGY: &[&str] = &["steady", "moderate", "balanced", "regular", "routine"];
pub const LOW_ENERGY: &[&str] = &["peaceful", "calm", "relaxing", "gentle", "quiet", "meditate", "slow"];

pub const FOCUSED_TONE: &[&str] = &["focus", "focused", "concentrate", "task", "work", "productive"];
pub const CALM_TONE: &[&str] = &["peaceful", "calm", "relaxing", "gentle", "quiet", "serene"];
pub const INSPIRING_TONE: &[&str] = &["inspire", "inspiring", "purpose", "dream", "hope", "vision", "wisdom"];
pub const PLAYFUL_TONE: &[&str] = &["fun", "playful", "joke", "laugh", "silly", "party"];

pub const RECIPROCITY: &[&str] = &["reciprocity", "balance", "give", "receive", "ayni", "exchange"];
pub const COMMON_GOOD: &[&str] = &["collective", "common", "commons", "solidarity", "shared", "public"];
pub const COOPERATION: &[&str] = &["cooperation", "collaborate", "together", "community", "team"];
pub const SUSTAINABILITY: &[&str] = &["sustainable", "environment", "green", "future", "planet"];

pub const TOPICS: &[(&str, &[&str])] = &[
    ("learning", &["learn", "education", "study", "course", "tutorial"]),
    ("marketplace", &["buy", "sell", "product", "service", "exchange"]),
    ("social", &["community", "friend", "share", "connect", "social"]),
    ("gaming", &["game", "play", "challenge", "achievement", "compete"]),
    ("wellness", &["health", "wellness", "meditation", "balance", "mindful"]),
];

pub fn sentiment_words(sentiment: Sentiment) -> &'static [&'static str] {
    match sentiment {
        Sentiment::Neutral => &[],
        Sentiment::Positive => POSITIVE,
        Sentiment::Negative => NEGATIVE,
    }
}

pub fn energy_words(energy: EnergyLevel) -> &'static [&'static str] {
    match energy {
        EnergyLevel::Low => LOW_ENERGY,
        EnergyLevel::Medium => MEDIUM_ENERGY,
        EnergyLevel::High => HIGH_ENERGY,
    }
}

/// Energetic tone shares the high-energy vocabulary.
pub fn tone_words(tone: EmotionalTone) -> &'static [&'static str] {
    match tone {
        EmotionalTone::Focused => FOCUSED_TONE,
        EmotionalTone::Calm => CALM_TONE,
        EmotionalTone::Energetic => HIGH_ENERGY,
        EmotionalTone::Inspiring => INSPIRING_TONE,
        EmotionalTone::Playful => PLAYFUL_TONE,
    }
}

/// Keyword set and normalizing constant per philosophy dimension.
pub fn philosophy_words(dimension: PhilosophyDimension) -> (&'static [&'static str], f64) {
    match dimension {
        PhilosophyDimension::Reciprocity => (RECIPROCITY, 4.0),
        PhilosophyDimension::CommonGood => (COMMON_GOOD, 4.0),
        PhilosophyDimension::Cooperation => (COOPERATION, 5.0),
        PhilosophyDimension::Sustainability => (SUSTAINABILITY, 4.0),
    }
}
