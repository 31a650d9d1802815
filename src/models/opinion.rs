use serde::{Deserialize, Serialize};

use crate::models::sentiment::{Emotion, Sentiment};

/// Subject-matter bucket used to select a base opinion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Gst,
    IncomeTax,
    Cryptocurrency,
    Audit,
    General,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Gst => "gst",
            Topic::IncomeTax => "income_tax",
            Topic::Cryptocurrency => "cryptocurrency",
            Topic::Audit => "audit",
            Topic::General => "general",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output tone mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WritingVoice {
    #[default]
    Aggressive,
    Emotional,
    Balanced,
    Neutral,
}

impl WritingVoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            WritingVoice::Aggressive => "aggressive",
            WritingVoice::Emotional => "emotional",
            WritingVoice::Balanced => "balanced",
            WritingVoice::Neutral => "neutral",
        }
    }

    /// Tone label reported by the analyze endpoint
    pub fn tone(&self) -> &'static str {
        match self {
            WritingVoice::Aggressive => "Bold and Direct",
            WritingVoice::Emotional => "Passionate and Expressive",
            WritingVoice::Balanced => "Thoughtful and Nuanced",
            WritingVoice::Neutral => "Professional and Factual",
        }
    }

    /// "Aggressive", "Emotional", ...
    pub fn title(&self) -> &'static str {
        match self {
            WritingVoice::Aggressive => "Aggressive",
            WritingVoice::Emotional => "Emotional",
            WritingVoice::Balanced => "Balanced",
            WritingVoice::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for WritingVoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Intensity modifier for aggressive and emotional phrasing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BiasLevel {
    Mild,
    Moderate,
    #[default]
    Strong,
}

impl BiasLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiasLevel::Mild => "mild",
            BiasLevel::Moderate => "moderate",
            BiasLevel::Strong => "strong",
        }
    }
}

impl std::fmt::Display for BiasLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of POST /api/sentiment/opinionated-answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpinionatedRequest {
    pub question: String,
    /// Accepted for compatibility; the topic is always detected from the question
    pub topic: Option<String>,
    #[serde(default)]
    pub writing_voice: WritingVoice,
    #[serde(default)]
    pub bias_level: BiasLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpinionatedAnswer {
    pub question: String,
    pub sentiment: Sentiment,
    pub emotion: Emotion,
    pub confidence: f64,
    pub opinionated_answer: String,
    pub writing_voice: WritingVoice,
    pub bias_level: BiasLevel,
    pub tone: String,
}

/// Body of POST /api/sentiment/ca-opinion. Every field is optional so that a missing
/// question surfaces as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaOpinionRequest {
    #[serde(default)]
    pub question: Option<String>,
    /// Accepted and ignored; the marketing answer never looks at topics
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaOpinion {
    pub answer: String,
    pub sentiment: Sentiment,
    pub emotion: Emotion,
    pub tone: String,
    pub bias: String,
}

/// `{"success": true, "data": ...}` envelope used by the answer endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}
