//! Valence engine backed by VADER (Valence Aware Dictionary and sEntiment Reasoner).
//!
//! VADER is tuned for short social-media style text and reports both a normalized
//! compound score and the share of positive, negative and neutral valence.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::errors::AnalyzerError;
use crate::external::polarity_engine::PolarityEngine;
use crate::models::PolarityScores;

pub struct ValenceEngine {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl ValenceEngine {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for ValenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityEngine for ValenceEngine {
    fn name(&self) -> &'static str {
        "valence"
    }

    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, AnalyzerError> {
        let scores = self.analyzer.polarity_scores(text);

        let lookup = |key: &str| -> Result<f64, AnalyzerError> {
            scores.get(key).copied().ok_or_else(|| AnalyzerError::Engine {
                engine: "valence",
                reason: format!("missing '{}' score", key),
            })
        };

        Ok(PolarityScores {
            compound: lookup("compound")?,
            positive: lookup("pos")?,
            negative: lookup("neg")?,
            neutral: lookup("neu")?,
            subjectivity: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let engine = ValenceEngine::new();
        let scores = engine.polarity_scores("This is amazing and wonderful").unwrap();
        assert!(scores.compound > 0.5, "compound was {}", scores.compound);
        assert!(scores.positive > 0.3, "pos was {}", scores.positive);
        assert_eq!(scores.negative, 0.0);
    }

    #[test]
    fn test_negative_text() {
        let engine = ValenceEngine::new();
        let scores = engine.polarity_scores("This is a terrible, horrible mess").unwrap();
        assert!(scores.compound < -0.5, "compound was {}", scores.compound);
        assert!(scores.negative > 0.3, "neg was {}", scores.negative);
    }

    #[test]
    fn test_scores_stay_in_range() {
        let engine = ValenceEngine::new();
        for text in [
            "GST filing deadline is next week",
            "I HATE this!!! Worst. System. Ever.",
            "Bitcoin is wonderful, fantastic, amazing!!!",
        ] {
            let s = engine.polarity_scores(text).unwrap();
            assert!((-1.0..=1.0).contains(&s.compound));
            for share in [s.positive, s.negative, s.neutral] {
                assert!((0.0..=1.0).contains(&share));
            }
        }
    }
}
