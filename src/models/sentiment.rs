use serde::{Deserialize, Serialize};

use crate::models::opinion::WritingVoice;

/// Coarse sentiment classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a compound score. The dead-zone is (-0.05, 0.05), both edges inclusive
    /// on the polar side.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Sentiment::Positive
        } else if compound <= -0.05 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Emotional tone detected from keywords and valence proportions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Positive,
    Negative,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Positive => "positive",
            Emotion::Negative => "negative",
            Emotion::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw output of a single polarity engine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolarityScores {
    pub compound: f64,     // -1.0 to +1.0
    pub positive: f64,     // share of positive valence, 0.0 to 1.0
    pub negative: f64,     // share of negative valence, 0.0 to 1.0
    pub neutral: f64,      // share of neutral valence, 0.0 to 1.0
    pub subjectivity: f64, // 0.0 (objective) to 1.0 (subjective); 0.0 if the engine has no notion of it
}

/// Result of scoring one piece of text
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub intensity: f64,
    pub emotion: Emotion,

    // Engine breakdown
    pub compound: f64,
    pub pattern_polarity: f64,
    pub pattern_subjectivity: f64,
    pub valence_compound: f64,
    pub valence_pos: f64,
    pub valence_neg: f64,
    pub valence_neu: f64,
}

/// Body of POST /api/sentiment/analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
    /// Free-form context from the caller; accepted but not used in scoring
    pub context: Option<String>,
    #[serde(default)]
    pub writing_voice: WritingVoice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub emotion: Emotion,
    pub intensity: f64,
    pub opinionated_response: String,
    pub tone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_compound_boundaries() {
        assert_eq!(Sentiment::from_compound(0.05), Sentiment::Positive);
        assert_eq!(Sentiment::from_compound(-0.05), Sentiment::Negative);
        assert_eq!(Sentiment::from_compound(0.0499), Sentiment::Neutral);
        assert_eq!(Sentiment::from_compound(-0.0499), Sentiment::Neutral);
        assert_eq!(Sentiment::from_compound(0.9), Sentiment::Positive);
        assert_eq!(Sentiment::from_compound(-0.9), Sentiment::Negative);
    }

    #[test]
    fn test_serialization_is_lowercase() {
        assert_eq!(serde_json::to_string(&Sentiment::Positive).unwrap(), "\"positive\"");
        assert_eq!(serde_json::to_string(&Emotion::Surprise).unwrap(), "\"surprise\"");
    }

    #[test]
    fn test_analyze_request_defaults_to_aggressive() {
        let req: SentimentRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(req.writing_voice, WritingVoice::Aggressive);
        assert!(req.context.is_none());
    }
}
