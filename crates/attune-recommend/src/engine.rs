//! RecommendationEngine: scoring + adaptation behind a memoizing cache,
//! with a feedback loop scaling confidence.

use attune_analysis::{ContentInput, ContextInput};
use attune_core::config::RecommendationConfig;
use attune_core::errors::AttuneResult;
use attune_core::models::{Category, ContentFeatures, Feedback, Recommendation, UserContext};
use attune_observability::tracing_setup::events;
use chrono::Utc;
use tracing::Instrument;

use crate::adaptation::{generate_adaptations, GeneratedAdaptations};
use crate::cache::RecommendationCache;
use crate::cache_key::context_hash;
use crate::learning::{LearningLoop, LearningStats};
use crate::scoring::{self, Selection};

pub struct RecommendationEngine {
    cache: RecommendationCache,
    learning: LearningLoop,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self {
            cache: RecommendationCache::new(config.cache_capacity),
            learning: LearningLoop::new(config),
        }
    }

    pub fn cache(&self) -> &RecommendationCache {
        &self.cache
    }

    pub fn learning(&self) -> &LearningLoop {
        &self.learning
    }

    /// Uncached scoring with the current model accuracy. Deterministic for
    /// fixed inputs while accuracy is unchanged.
    pub fn score(&self, features: &ContentFeatures, ctx: &UserContext) -> AttuneResult<Selection> {
        let accuracy = self.learning.accuracy()?;
        Ok(scoring::select(&scoring::score(features, ctx), accuracy, ctx))
    }

    /// Cached recommendation for the inputs. `force_refresh` recomputes and
    /// supersedes whatever is cached under the same key.
    pub async fn recommend(
        &self,
        features: &ContentFeatures,
        ctx: &UserContext,
        force_refresh: bool,
    ) -> AttuneResult<Recommendation> {
        let key = context_hash(features, ctx);
        let span = attune_observability::recommendation_span!(key, force_refresh);
        let accuracy = self.learning.accuracy()?;

        let rec = async {
            if force_refresh {
                let fresh = build_recommendation(features, ctx, accuracy, &key);
                self.cache.refresh(&key, fresh.clone()).await;
                fresh
            } else {
                self.cache
                    .get_or_compute(&key, async { build_recommendation(features, ctx, accuracy, &key) })
                    .await
            }
        }
        .instrument(span)
        .await;
        Ok(rec)
    }

    /// Resolve tagged inputs, snapshotting both before scoring.
    pub async fn recommend_input(
        &self,
        content: &ContentInput,
        context: &ContextInput,
        force_refresh: bool,
    ) -> AttuneResult<Recommendation> {
        let features = content.features();
        let ctx = context.snapshot(Utc::now());
        self.recommend(&features, &ctx, force_refresh).await
    }

    /// Adaptations for an explicitly named category. Unknown ids are a
    /// caller error.
    pub fn adaptations_for(&self, category_id: &str, ctx: &UserContext) -> AttuneResult<GeneratedAdaptations> {
        let category: Category = category_id.parse()?;
        Ok(generate_adaptations(category, ctx))
    }

    /// Feed a satisfaction signal into the learning loop.
    pub fn record_feedback(&self, feedback: &Feedback) -> AttuneResult<f64> {
        self.learning.record(feedback)
    }

    pub fn stats(&self) -> AttuneResult<LearningStats> {
        self.learning.stats()
    }

    /// Drop all cached recommendations and learning state.
    pub fn reset(&self) -> AttuneResult<()> {
        self.cache.invalidate_all();
        self.learning.reset()
    }
}

fn build_recommendation(
    features: &ContentFeatures,
    ctx: &UserContext,
    accuracy: f64,
    key: &str,
) -> Recommendation {
    let selection = scoring::select(&scoring::score(features, ctx), accuracy, ctx);
    let generated = generate_adaptations(selection.category, ctx);
    events::recommendation_computed(selection.category.id(), selection.confidence, key);

    Recommendation {
        id: uuid::Uuid::new_v4().to_string(),
        category: selection.category,
        confidence: selection.confidence,
        reasons: selection.reasons,
        adaptations: generated.adaptations,
        accessibility_overrides: generated.accessibility_overrides,
        estimated_apply_cost_ms: generated.estimated_apply_cost_ms,
        created_at: Utc::now(),
    }
}
