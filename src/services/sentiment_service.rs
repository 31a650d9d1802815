use std::sync::Arc;

use tracing::debug;

use crate::errors::AnalyzerError;
use crate::external::pattern::PatternEngine;
use crate::external::polarity_engine::PolarityEngine;
use crate::external::valence::ValenceEngine;
use crate::models::{AnalysisResult, Emotion, PolarityScores, Sentiment};

const JOY_WORDS: &[&str] = &["happy", "great", "excellent", "wonderful", "amazing", "love", "fantastic"];
const ANGER_WORDS: &[&str] = &["angry", "furious", "hate", "terrible", "worst", "horrible", "disgusting"];
const SADNESS_WORDS: &[&str] = &["sad", "unfortunate", "disappointed", "poor", "bad", "tragic"];
const FEAR_WORDS: &[&str] = &["afraid", "scary", "worried", "concerned", "dangerous", "risk"];
const SURPRISE_WORDS: &[&str] = &["surprising", "shocked", "unexpected", "unbelievable"];

/// Valence share above which the keyword counts are consulted
const EMOTION_GATE: f64 = 0.3;

/// Merges two independent polarity engines into a single classification.
///
/// The pattern engine contributes polarity only. The valence engine contributes polarity
/// plus the positive/negative/neutral shares that drive intensity and emotion.
pub struct SentimentScorer {
    pattern: Arc<dyn PolarityEngine>,
    valence: Arc<dyn PolarityEngine>,
}

impl SentimentScorer {
    pub fn new(pattern: Arc<dyn PolarityEngine>, valence: Arc<dyn PolarityEngine>) -> Self {
        Self { pattern, valence }
    }

    /// Scorer wired to the in-crate pattern lexicon and VADER
    pub fn with_default_engines() -> Self {
        Self::new(Arc::new(PatternEngine::new()), Arc::new(ValenceEngine::new()))
    }

    /// Score `text`. Blank input is rejected before either engine runs.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalyzerError> {
        if text.trim().is_empty() {
            return Err(AnalyzerError::EmptyText);
        }

        let pattern = self.pattern.polarity_scores(text)?;
        let valence = self.valence.polarity_scores(text)?;

        let compound = (pattern.compound + valence.compound) / 2.0;
        let sentiment = Sentiment::from_compound(compound);
        let confidence = compound.abs().min(1.0);
        let intensity = valence
            .positive
            .abs()
            .max(valence.negative.abs())
            .max(valence.neutral.abs());
        let emotion = detect_emotion(text, &valence);

        debug!(
            "{}={:.3} {}={:.3} (pos={:.3}, neg={:.3}, neu={:.3}) -> compound={:.3} {} / {}",
            self.pattern.name(),
            pattern.compound,
            self.valence.name(),
            valence.compound,
            valence.positive,
            valence.negative,
            valence.neutral,
            compound,
            sentiment,
            emotion
        );

        Ok(AnalysisResult {
            sentiment,
            confidence,
            intensity,
            emotion,
            compound,
            pattern_polarity: pattern.compound,
            pattern_subjectivity: pattern.subjectivity,
            valence_compound: valence.compound,
            valence_pos: valence.positive,
            valence_neg: valence.negative,
            valence_neu: valence.neutral,
        })
    }
}

/// Number of words from `words` that occur anywhere in `text_lower`
fn count_matches(text_lower: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text_lower.contains(*w)).count()
}

/// Detect the emotional tone of `text`.
///
/// Keyword counts only matter once the valence shares cross the gate: negative side first
/// (anger > sadness > fear), then positive (joy > surprise).
pub fn detect_emotion(text: &str, valence: &PolarityScores) -> Emotion {
    let text_lower = text.to_lowercase();

    if valence.negative > EMOTION_GATE {
        if count_matches(&text_lower, ANGER_WORDS) > 0 {
            Emotion::Anger
        } else if count_matches(&text_lower, SADNESS_WORDS) > 0 {
            Emotion::Sadness
        } else if count_matches(&text_lower, FEAR_WORDS) > 0 {
            Emotion::Fear
        } else {
            Emotion::Negative
        }
    } else if valence.positive > EMOTION_GATE {
        if count_matches(&text_lower, JOY_WORDS) > 0 {
            Emotion::Joy
        } else if count_matches(&text_lower, SURPRISE_WORDS) > 0 {
            Emotion::Surprise
        } else {
            Emotion::Positive
        }
    } else {
        Emotion::Neutral
    }
}
