use std::collections::{BTreeMap, BTreeSet};

use attune_core::models::{ContentFeatures, EmotionalTone, EnergyLevel, PhilosophyDimension, Sentiment};

use super::keywords;
use super::tokenizer::tokenize;

/// Analyze raw text into a bounded feature vector.
///
/// Categorical dimensions are an argmax over keyword counts, ties going to
/// the bucket declared first. Philosophy scores are `min(1, count / k)`.
/// Empty or keyword-free text yields the default buckets and zero scores.
pub fn analyze(text: &str) -> ContentFeatures {
    let tokens = tokenize(text);

    let sentiment = argmax(&Sentiment::PRIORITY, |s| count(&tokens, keywords::sentiment_words(s)));
    let energy = argmax(&EnergyLevel::PRIORITY, |e| count(&tokens, keywords::energy_words(e)));
    let emotional_tone = argmax(&EmotionalTone::PRIORITY, |t| count(&tokens, keywords::tone_words(t)));

    let philosophy_scores: BTreeMap<PhilosophyDimension, f64> = PhilosophyDimension::ALL
        .into_iter()
        .map(|dim| {
            let (words, constant) = keywords::philosophy_words(dim);
            let score = (count(&tokens, words) as f64 / constant).min(1.0);
            (dim, score)
        })
        .collect();

    let topics: BTreeSet<String> = keywords::TOPICS
        .iter()
        .filter(|(_, words)| count(&tokens, words) > 0)
        .map(|(topic, _)| topic.to_string())
        .collect();

    tracing::trace!(
        tokens = tokens.len(),
        sentiment = ?sentiment,
        energy = ?energy,
        topics = topics.len(),
        "content analyzed"
    );

    ContentFeatures {
        sentiment,
        energy,
        topics,
        philosophy_scores,
        emotional_tone,
    }
}

fn count(tokens: &[String], words: &[&str]) -> usize {
    tokens.iter().filter(|t| words.contains(&t.as_str())).count()
}

/// First bucket with the strictly highest count wins.
fn argmax<T: Copy>(priority: &[T], counts: impl Fn(T) -> usize) -> T {
    let mut best = priority[0];
    let mut best_count = counts(best);
    for &candidate in &priority[1..] {
        let c = counts(candidate);
        if c > best_count {
            best = candidate;
            best_count = c;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_defaults() {
        let features = analyze("");
        assert_eq!(features.sentiment, Sentiment::Neutral);
        assert_eq!(features.energy, EnergyLevel::Low);
        assert_eq!(features.emotional_tone, EmotionalTone::Focused);
        assert!(features.topics.is_empty());
        assert!(features.philosophy_scores.values().all(|&v| v == 0.0));
    }

    #[test]
    fn high_energy_text() {
        let features = analyze("An exciting, dynamic and powerful action game!");
        assert_eq!(features.energy, EnergyLevel::High);
        assert_eq!(features.emotional_tone, EmotionalTone::Energetic);
        assert!(features.has_topic("gaming"));
    }

    #[test]
    fn sentiment_tie_goes_to_positive() {
        let features = analyze("good bad");
        assert_eq!(features.sentiment, Sentiment::Positive);
        let features = analyze("good bad awful");
        assert_eq!(features.sentiment, Sentiment::Negative);
    }

    #[test]
    fn energy_tie_goes_to_lower_bucket() {
        let features = analyze("calm exciting");
        assert_eq!(features.energy, EnergyLevel::Low);
    }

    #[test]
    fn philosophy_scores_saturate_at_one() {
        let features = analyze("give receive exchange balance reciprocity ayni");
        assert_eq!(features.philosophy(PhilosophyDimension::Reciprocity), 1.0);
        let features = analyze("team together");
        assert_eq!(features.philosophy(PhilosophyDimension::Cooperation), 0.4);
    }

    #[test]
    fn topic_keywords_are_shared_across_topics() {
        let features = analyze("balance");
        assert!(features.has_topic("wellness"));
        assert!(!features.has_topic("learning"));
    }
}
