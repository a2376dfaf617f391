mod analytics_event;
mod category;
mod content;
mod context;
mod degradation_event;
mod learning_record;
mod prediction;
mod recommendation;
mod resource;

pub use analytics_event::{AnalyticsEvent, AnalyticsEventKind};
pub use category::Category;
pub use content::{ContentFeatures, EmotionalTone, EnergyLevel, PhilosophyDimension, Sentiment};
pub use context::{
    AccessibilityFlags, ActivityLevel, AnimationPreference, BrightnessPreference,
    ContrastPreference, DeviceTier, FocusPreference, InteractionPatterns, NetworkTier,
    Preferences, TimeBucket, UserContext,
};
pub use degradation_event::DegradationEvent;
pub use learning_record::{Feedback, LearningOutcome, LearningRecord};
pub use prediction::{LoadingPrediction, PredictionContext, Priority};
pub use recommendation::{Adaptations, Recommendation};
pub use resource::{RegistrySnapshot, ResourceDescriptor, ResourceMetricsUpdate, UsageObservation};
