use attune_core::constants::LONG_SESSION_SECS;
use attune_core::models::{
    ActivityLevel, Category, ContentFeatures, EmotionalTone, EnergyLevel, FocusPreference,
    PhilosophyDimension, TimeBucket, UserContext,
};

/// Philosophy score above which a philosophy rule fires.
pub const PHILOSOPHY_THRESHOLD: f64 = 0.5;

/// A boolean test over the scoring inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    Energy(EnergyLevel),
    Tone(EmotionalTone),
    Topic(&'static str),
    Philosophy(PhilosophyDimension),
    Activity(ActivityLevel),
    TimeOfDay(TimeBucket),
    Focus(FocusPreference),
    LongSession,
}

impl Condition {
    pub fn holds(&self, features: &ContentFeatures, ctx: &UserContext) -> bool {
        match *self {
            Self::Energy(e) => features.energy == e,
            Self::Tone(t) => features.emotional_tone == t,
            Self::Topic(t) => features.has_topic(t),
            Self::Philosophy(d) => features.philosophy(d) > PHILOSOPHY_THRESHOLD,
            Self::Activity(a) => ctx.activity_level == a,
            Self::TimeOfDay(b) => ctx.time_bucket == b,
            Self::Focus(f) => ctx.preferences.focus == f,
            Self::LongSession => ctx.session_duration_secs > LONG_SESSION_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub condition: Condition,
    pub weight: f64,
    pub label: &'static str,
}

const fn rule(condition: Condition, weight: f64, label: &'static str) -> Rule {
    Rule {
        condition,
        weight,
        label,
    }
}

/// Content and context rules of one category.
#[derive(Debug)]
pub struct CategoryRules {
    pub content: &'static [Rule],
    pub context: &'static [Rule],
}

static ACTION_ORIENTED: CategoryRules = CategoryRules {
    content: &[
        rule(Condition::Energy(EnergyLevel::High), 0.4, "high-energy content"),
        rule(Condition::Tone(EmotionalTone::Energetic), 0.2, "energetic tone"),
        rule(Condition::Topic("gaming"), 0.1, "gaming topic"),
    ],
    context: &[
        rule(Condition::Activity(ActivityLevel::High), 0.2, "high user activity"),
        rule(Condition::TimeOfDay(TimeBucket::Morning), 0.1, "morning session"),
    ],
};

static FLUID: CategoryRules = CategoryRules {
    content: &[
        rule(Condition::Tone(EmotionalTone::Calm), 0.3, "calm tone"),
        rule(Condition::Philosophy(PhilosophyDimension::Reciprocity), 0.3, "reciprocity themes"),
    ],
    context: &[
        rule(Condition::Focus(FocusPreference::Entertainment), 0.2, "entertainment focus"),
        rule(Condition::TimeOfDay(TimeBucket::Evening), 0.2, "evening session"),
    ],
};

static GROUNDED: CategoryRules = CategoryRules {
    content: &[
        rule(Condition::Topic("learning"), 0.4, "learning topic"),
        rule(Condition::Philosophy(PhilosophyDimension::Sustainability), 0.3, "sustainability themes"),
    ],
    context: &[
        rule(Condition::Focus(FocusPreference::Productivity), 0.2, "productivity focus"),
        rule(Condition::LongSession, 0.1, "long session"),
    ],
};

static COMMUNICATIVE: CategoryRules = CategoryRules {
    content: &[
        rule(Condition::Topic("social"), 0.4, "social topic"),
        rule(Condition::Tone(EmotionalTone::Inspiring), 0.3, "inspiring tone"),
        rule(Condition::Topic("learning"), 0.1, "shared learning"),
    ],
    context: &[rule(Condition::TimeOfDay(TimeBucket::Afternoon), 0.2, "afternoon session")],
};

static TRANSCENDENT: CategoryRules = CategoryRules {
    content: &[
        rule(Condition::Philosophy(PhilosophyDimension::CommonGood), 0.4, "common-good themes"),
        rule(Condition::Tone(EmotionalTone::Inspiring), 0.3, "inspiring tone"),
        rule(Condition::Topic("wellness"), 0.1, "wellness topic"),
    ],
    context: &[rule(Condition::TimeOfDay(TimeBucket::Night), 0.2, "night session")],
};

pub fn rules_for(category: Category) -> &'static CategoryRules {
    match category {
        Category::ActionOriented => &ACTION_ORIENTED,
        Category::Fluid => &FLUID,
        Category::Grounded => &GROUNDED,
        Category::Communicative => &COMMUNICATIVE,
        Category::Transcendent => &TRANSCENDENT,
    }
}
