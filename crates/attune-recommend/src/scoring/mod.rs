//! Profile Scoring Engine.
//!
//! Each category accumulates weighted boolean-rule contributions. Context
//! rules only count once a content rule of the same category has matched,
//! so a context alone never selects a profile and cold start scores zero.

mod rules;

use attune_core::models::{Category, ContentFeatures, UserContext};
use serde::Serialize;

pub use rules::{rules_for, CategoryRules, Condition, Rule, PHILOSOPHY_THRESHOLD};

/// Score of one category with the labels of the rules that fired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
    pub matched: Vec<&'static str>,
}

/// Outcome of selection over a full score card.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub category: Category,
    /// Raw winning score, 0.0 when the default category was used.
    pub score: f64,
    pub confidence: f64,
    pub reasons: Vec<String>,
}

/// Score every category, in declaration order.
pub fn score(features: &ContentFeatures, ctx: &UserContext) -> Vec<CategoryScore> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let rules = rules_for(category);
            let mut total = 0.0;
            let mut matched = Vec::new();

            for rule in rules.content.iter().filter(|r| r.condition.holds(features, ctx)) {
                total += rule.weight;
                matched.push(rule.label);
            }
            if !matched.is_empty() {
                for rule in rules.context.iter().filter(|r| r.condition.holds(features, ctx)) {
                    total += rule.weight;
                    matched.push(rule.label);
                }
            }

            CategoryScore {
                category,
                score: total,
                matched,
            }
        })
        .collect()
}

/// Argmax over `scores`, first declared wins ties. All-zero falls back to
/// [`Category::DEFAULT`] with zero confidence.
pub fn select(scores: &[CategoryScore], model_accuracy: f64, ctx: &UserContext) -> Selection {
    let winner = scores.iter().fold(None::<&CategoryScore>, |best, s| match best {
        Some(b) if b.score >= s.score => Some(b),
        _ if s.score > 0.0 => Some(s),
        other => other,
    });

    let (category, raw, mut reasons) = match winner {
        Some(w) => (
            w.category,
            w.score,
            w.matched.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
        ),
        None => (
            Category::DEFAULT,
            0.0,
            vec!["no matching signals, default profile".to_string()],
        ),
    };
    reasons.push(format!("time of day: {}", ctx.time_bucket.as_str()));
    reasons.push(format!("focus: {}", ctx.preferences.focus.as_str()));

    Selection {
        category,
        score: raw,
        confidence: (model_accuracy * raw).clamp(0.0, 1.0),
        reasons,
    }
}
