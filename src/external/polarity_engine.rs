use crate::errors::AnalyzerError;
use crate::models::PolarityScores;

/// A sentiment engine the scorer treats as a black box.
///
/// Implementations must return `compound` in [-1, 1] and the `positive`/`negative`/`neutral`
/// shares in [0, 1]. Engines are shared across requests, so they hold no mutable state.
pub trait PolarityEngine: Send + Sync {
    /// Short identifier used in logs and error messages
    fn name(&self) -> &'static str;

    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, AnalyzerError>;
}
