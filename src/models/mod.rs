pub mod opinion;
pub mod sentiment;

pub use opinion::{
    ApiEnvelope, BiasLevel, CaOpinion, CaOpinionRequest, OpinionatedAnswer, OpinionatedRequest,
    Topic, WritingVoice,
};
pub use sentiment::{
    AnalysisResult, Emotion, PolarityScores, Sentiment, SentimentRequest, SentimentResponse,
};
