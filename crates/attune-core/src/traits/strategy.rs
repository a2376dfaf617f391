use crate::models::{LoadingPrediction, PredictionContext, RegistrySnapshot};

/// One independent prediction heuristic.
///
/// Implementations are stateless per call: everything they read comes from
/// the snapshot and context.
pub trait IPredictionStrategy: Send + Sync {
    /// Stable name used to enable/disable the strategy.
    fn name(&self) -> &'static str;

    fn predict(&self, snapshot: &RegistrySnapshot, ctx: &PredictionContext) -> Vec<LoadingPrediction>;
}
