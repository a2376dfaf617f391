//! Context-hash: the cache key of a recommendation.

use attune_core::models::{ContentFeatures, UserContext};

/// blake3 hex digest of the stable scoring inputs:
/// `sentiment|energy|timeBucket|activityLevel|accessibility-bits`.
///
/// Volatile fields (scroll speed, exact session length) are excluded.
/// Accessibility bits are included so a cached entry built without an
/// override can never be served to a context that needs one.
pub fn context_hash(features: &ContentFeatures, ctx: &UserContext) -> String {
    let material = format!(
        "{}|{}|{}|{}|{}",
        features.sentiment.as_str(),
        features.energy.as_str(),
        ctx.time_bucket.as_str(),
        ctx.activity_level.as_str(),
        ctx.accessibility.bits(),
    );
    blake3::hash(material.as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_core::models::{AccessibilityFlags, EnergyLevel, InteractionPatterns};

    #[test]
    fn volatile_fields_do_not_change_key() {
        let features = ContentFeatures::default();
        let a = UserContext::default();
        let b = UserContext {
            session_duration_secs: 9_999,
            interaction_patterns: InteractionPatterns {
                scroll_speed: 812.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(context_hash(&features, &a), context_hash(&features, &b));
    }

    #[test]
    fn stable_fields_change_key() {
        let ctx = UserContext::default();
        let low = ContentFeatures::default();
        let high = ContentFeatures {
            energy: EnergyLevel::High,
            ..Default::default()
        };
        assert_ne!(context_hash(&low, &ctx), context_hash(&high, &ctx));

        let reduced = UserContext {
            accessibility: AccessibilityFlags {
                reduced_motion: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_ne!(context_hash(&low, &ctx), context_hash(&low, &reduced));
    }

    #[test]
    fn key_is_hex_digest() {
        let key = context_hash(&ContentFeatures::default(), &UserContext::default());
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
