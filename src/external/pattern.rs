//! Pattern engine: adjective-lexicon polarity and subjectivity.
//!
//! Each known word carries a (polarity, subjectivity) pair. The text score is the mean
//! over matched words, after applying:
//! 1. intensifiers, which scale the next matched word
//! 2. negations, which multiply the next matched word's polarity by -0.5
//!
//! A word that is neither a modifier nor in the lexicon resets pending modifiers.

use std::collections::HashMap;

use crate::errors::AnalyzerError;
use crate::external::polarity_engine::PolarityEngine;
use crate::models::PolarityScores;

const NEGATION_FACTOR: f64 = -0.5;

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("great", 0.8, 0.75),
    ("good", 0.7, 0.6),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("happy", 0.8, 1.0),
    ("love", 0.5, 0.6),
    ("nice", 0.6, 1.0),
    ("perfect", 1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("positive", 0.23, 0.55),
    ("revolutionary", 0.5, 0.7),
    ("fair", 0.7, 0.9),
    ("simple", 0.0, 0.36),
    ("easy", 0.43, 0.83),
    ("efficient", 0.4, 0.6),
    ("transparent", 0.3, 0.5),
    ("innovative", 0.5, 0.75),
    ("profitable", 0.5, 0.6),
    ("successful", 0.75, 0.95),
    ("helpful", 0.5, 0.5),
    ("useful", 0.3, 0.0),
    ("beneficial", 0.5, 0.6),
    ("clear", 0.1, 0.38),
    ("strong", 0.43, 0.73),
    ("surprising", 0.4, 0.8),
    ("unbelievable", 0.4, 0.9),
    // Negative
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("angry", -0.5, 1.0),
    ("furious", -0.6, 0.9),
    ("disgusting", -1.0, 1.0),
    ("disappointed", -0.75, 0.75),
    ("unfortunate", -0.5, 1.0),
    ("tragic", -0.75, 1.0),
    ("scary", -0.5, 1.0),
    ("afraid", -0.6, 0.9),
    ("worried", -0.4, 0.7),
    ("dangerous", -0.6, 0.9),
    ("chaotic", -0.4, 0.7),
    ("complicated", -0.5, 1.0),
    ("confusing", -0.3, 0.7),
    ("difficult", -0.5, 1.0),
    ("expensive", -0.5, 0.7),
    ("broken", -0.4, 0.4),
    ("unfair", -0.5, 0.9),
    ("volatile", -0.3, 0.7),
    ("risky", -0.4, 0.7),
    ("negative", -0.3, 0.4),
    ("useless", -0.5, 0.0),
    ("stupid", -0.8, 1.0),
    ("hate", -0.8, 0.9),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "none", "cannot", "can't", "cant",
    "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "aren't", "arent",
    "wasn't", "wasnt", "won't", "wont", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("highly", 1.3),
    ("totally", 1.3),
    ("absolutely", 1.5),
    ("completely", 1.4),
    ("so", 1.3),
    ("quite", 1.1),
    ("slightly", 0.5),
    ("somewhat", 0.7),
];

pub struct PatternEngine {
    words: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternEngine {
    pub fn new() -> Self {
        Self {
            words: LEXICON.iter().map(|&(w, p, s)| (w, (p, s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negation(word: &str) -> bool {
        NEGATIONS.contains(&word)
    }

    fn score(&self, text: &str) -> PatternResult {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .collect();

        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        let mut negate_next = false;
        let mut multiplier = 1.0;

        for token in &tokens {
            if Self::is_negation(token) {
                negate_next = true;
                continue;
            }

            if let Some(&m) = self.intensifiers.get(token) {
                multiplier = m;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = self.words.get(token) {
                let mut p = polarity * multiplier;
                if negate_next {
                    p *= NEGATION_FACTOR;
                }
                polarities.push(p.clamp(-1.0, 1.0));
                subjectivities.push((subjectivity * multiplier).clamp(0.0, 1.0));
            }

            negate_next = false;
            multiplier = 1.0;
        }

        let mean = |xs: &[f64]| {
            if xs.is_empty() {
                0.0
            } else {
                xs.iter().sum::<f64>() / xs.len() as f64
            }
        };

        PatternResult {
            polarity: mean(&polarities).clamp(-1.0, 1.0),
            subjectivity: mean(&subjectivities).clamp(0.0, 1.0),
            positive_hits: polarities.iter().filter(|p| **p > 0.0).count(),
            negative_hits: polarities.iter().filter(|p| **p < 0.0).count(),
            token_count: tokens.len(),
        }
    }
}

struct PatternResult {
    polarity: f64,
    subjectivity: f64,
    positive_hits: usize,
    negative_hits: usize,
    token_count: usize,
}

impl PolarityEngine for PatternEngine {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn polarity_scores(&self, text: &str) -> Result<PolarityScores, AnalyzerError> {
        let result = self.score(text);

        let (positive, negative, neutral) = if result.token_count == 0 {
            (0.0, 0.0, 1.0)
        } else {
            let total = result.token_count as f64;
            let pos = result.positive_hits as f64 / total;
            let neg = result.negative_hits as f64 / total;
            (pos, neg, (1.0 - pos - neg).max(0.0))
        };

        Ok(PolarityScores {
            compound: result.polarity,
            positive,
            negative,
            neutral,
            subjectivity: result.subjectivity,
        })
    }
}
