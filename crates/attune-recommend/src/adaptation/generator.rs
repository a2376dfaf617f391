use std::collections::BTreeMap;

use attune_core::models::{
    Adaptations, AnimationPreference, BrightnessPreference, Category, ContrastPreference,
    TimeBucket, UserContext,
};

use super::tokens::palette;

/// Properties that must be applied before the next paint.
const CRITICAL_PROPERTIES: &[&str] = &[
    "--primary-color",
    "--accent-color",
    "--animation-duration",
    "--transition-duration",
    "--background-luminance",
    "--contrast-ratio",
];

const DURATION_SUFFIX: &str = "-duration";

const COST_PER_CRITICAL_MS: f64 = 0.5;
const COST_PER_DEFERRED_MS: f64 = 0.1;

/// Generator output, before it is wrapped into a `Recommendation`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAdaptations {
    pub adaptations: Adaptations,
    /// The accessibility overrides that were merged in, for auditing.
    pub accessibility_overrides: BTreeMap<String, String>,
    pub estimated_apply_cost_ms: f64,
}

pub fn is_critical_property(property: &str) -> bool {
    CRITICAL_PROPERTIES.contains(&property)
}

/// Expand `category` into critical and deferred property sets for `ctx`.
pub fn generate_adaptations(category: Category, ctx: &UserContext) -> GeneratedAdaptations {
    let p = palette(category);
    let duration_scale = match ctx.preferences.animation {
        AnimationPreference::Minimal => 0.5,
        AnimationPreference::Normal | AnimationPreference::Enhanced => 1.0,
    };
    let ms = |base: u32| format!("{}ms", (f64::from(base) * duration_scale).round() as u32);

    let mut adaptations = Adaptations::default();

    put(&mut adaptations, "--primary-color", p.primary_color.into());
    put(&mut adaptations, "--accent-color", p.accent_color.into());
    put(&mut adaptations, "--gradient", p.gradient.into());
    put(&mut adaptations, "--border-radius", p.border_radius.into());
    put(&mut adaptations, "--box-shadow", p.box_shadow.into());
    put(&mut adaptations, "--animation-duration", ms(p.animation_ms));
    put(&mut adaptations, "--transition-duration", ms(p.transition_ms));
    put(&mut adaptations, "--hover-duration", ms(p.hover_ms));

    if ctx.time_bucket == TimeBucket::Night {
        put(&mut adaptations, "--brightness", "0.8".into());
    }
    match ctx.preferences.brightness {
        BrightnessPreference::Dark => put(&mut adaptations, "--background-luminance", "0.1".into()),
        BrightnessPreference::Light => put(&mut adaptations, "--background-luminance", "0.95".into()),
        BrightnessPreference::Auto => {}
    }
    if ctx.preferences.animation == AnimationPreference::Enhanced {
        put(&mut adaptations, "--motion-scale", "1.25".into());
    }
    if ctx.preferences.contrast == ContrastPreference::High {
        put(&mut adaptations, "--contrast-ratio", "7:1".into());
    }

    let overrides = accessibility_overrides(ctx);
    for (k, v) in &overrides {
        put(&mut adaptations, k, v.clone());
    }
    if ctx.accessibility.reduced_motion {
        for (k, v) in adaptations.critical.iter_mut().chain(adaptations.deferred.iter_mut()) {
            if k.ends_with(DURATION_SUFFIX) {
                *v = "0ms".to_string();
            }
        }
    }

    let estimated_apply_cost_ms = adaptations.critical.len() as f64 * COST_PER_CRITICAL_MS
        + adaptations.deferred.len() as f64 * COST_PER_DEFERRED_MS;

    GeneratedAdaptations {
        adaptations,
        accessibility_overrides: overrides,
        estimated_apply_cost_ms,
    }
}

fn put(adaptations: &mut Adaptations, property: &str, value: String) {
    let target = if is_critical_property(property) {
        &mut adaptations.critical
    } else {
        &mut adaptations.deferred
    };
    target.insert(property.to_string(), value);
}

fn accessibility_overrides(ctx: &UserContext) -> BTreeMap<String, String> {
    let a = &ctx.accessibility;
    let mut out = BTreeMap::new();
    if a.reduced_motion {
        for k in ["--animation-duration", "--transition-duration", "--hover-duration"] {
            out.insert(k.to_string(), "0ms".to_string());
        }
        out.insert("--motion-scale".to_string(), "0".to_string());
    }
    if a.high_contrast {
        out.insert("--contrast-ratio".to_string(), "7:1".to_string());
        out.insert("--min-contrast-ratio".to_string(), "7".to_string());
    }
    if a.large_text {
        out.insert("--font-scale".to_string(), "1.25".to_string());
    }
    if a.screen_reader {
        out.insert("--focus-ring".to_string(), "3px solid currentColor".to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use attune_core::models::{AccessibilityFlags, Preferences};

    #[test]
    fn default_partitions() {
        let generated = generate_adaptations(Category::Fluid, &UserContext::default());
        let a = &generated.adaptations;
        assert_eq!(a.critical.get("--primary-color").map(String::as_str), Some("#4A90E2"));
        assert_eq!(a.critical.get("--animation-duration").map(String::as_str), Some("500ms"));
        assert_eq!(a.deferred.get("--hover-duration").map(String::as_str), Some("200ms"));
        assert!(a.deferred.contains_key("--gradient"));
        assert_eq!(a.critical.len(), 4);
        assert_eq!(a.deferred.len(), 4);
        assert!((generated.estimated_apply_cost_ms - 2.4).abs() < 1e-9);
        assert!(generated.accessibility_overrides.is_empty());
    }

    #[test]
    fn minimal_animation_halves_durations() {
        let ctx = UserContext {
            preferences: Preferences {
                animation: AnimationPreference::Minimal,
                ..Default::default()
            },
            ..Default::default()
        };
        let generated = generate_adaptations(Category::ActionOriented, &ctx);
        assert_eq!(generated.adaptations.get("--animation-duration"), Some("150ms"));
        assert_eq!(generated.adaptations.get("--hover-duration"), Some("75ms"));
    }

    #[test]
    fn reduced_motion_beats_enhanced_animation() {
        let ctx = UserContext {
            preferences: Preferences {
                animation: AnimationPreference::Enhanced,
                ..Default::default()
            },
            accessibility: AccessibilityFlags {
                reduced_motion: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let generated = generate_adaptations(Category::Transcendent, &ctx);
        assert_eq!(generated.adaptations.get("--motion-scale"), Some("0"));
        for (k, v) in generated.adaptations.iter() {
            if k.ends_with("-duration") {
                assert_eq!(v, "0ms", "{k}");
            }
        }
    }

    #[test]
    fn contexts_add_night_and_dark_tokens() {
        let ctx = UserContext {
            time_bucket: TimeBucket::Night,
            preferences: Preferences {
                brightness: BrightnessPreference::Dark,
                ..Default::default()
            },
            ..Default::default()
        };
        let generated = generate_adaptations(Category::Grounded, &ctx);
        assert_eq!(generated.adaptations.deferred.get("--brightness").map(String::as_str), Some("0.8"));
        assert_eq!(
            generated.adaptations.critical.get("--background-luminance").map(String::as_str),
            Some("0.1")
        );
    }

    #[test]
    fn high_contrast_and_screen_reader_overrides() {
        let ctx = UserContext {
            accessibility: AccessibilityFlags {
                high_contrast: true,
                screen_reader: true,
                large_text: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let generated = generate_adaptations(Category::Communicative, &ctx);
        let a = &generated.adaptations;
        assert_eq!(a.get("--contrast-ratio"), Some("7:1"));
        assert_eq!(a.get("--min-contrast-ratio"), Some("7"));
        assert_eq!(a.get("--font-scale"), Some("1.25"));
        assert_eq!(a.get("--focus-ring"), Some("3px solid currentColor"));
        assert_eq!(generated.accessibility_overrides.len(), 4);
    }
}
