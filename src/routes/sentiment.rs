use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{
    ApiEnvelope, BiasLevel, CaOpinion, CaOpinionRequest, OpinionatedAnswer, OpinionatedRequest,
    SentimentRequest, SentimentResponse,
};
use crate::services::{marketing_service, opinion_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze_sentiment))
        .route("/opinionated-answer", post(generate_opinionated_answer))
        .route("/ca-opinion", post(ca_opinionated_response))
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// POST /api/sentiment/analyze
///
/// Score the text and answer in the requested voice with a strong bias.
async fn analyze_sentiment(
    State(state): State<AppState>,
    Json(request): Json<SentimentRequest>,
) -> Result<Json<SentimentResponse>, AppError> {
    info!("POST /api/sentiment/analyze - voice: {}", request.writing_voice);

    if request.text.trim().is_empty() {
        return Err(AppError::Validation("Text cannot be empty".to_string()));
    }

    let analysis = state.scorer.analyze(&request.text).map_err(|e| {
        error!("Sentiment analysis failed: {}", e);
        AppError::Internal(format!("Analysis failed: {}", e))
    })?;

    let opinionated_response = opinion_service::generate_opinionated_response(
        &request.text,
        &analysis,
        request.writing_voice,
        BiasLevel::Strong,
    );

    info!(
        "Analyzed text: sentiment={}, emotion={}, confidence={:.3}",
        analysis.sentiment, analysis.emotion, analysis.confidence
    );

    Ok(Json(SentimentResponse {
        sentiment: analysis.sentiment,
        confidence: round3(analysis.confidence),
        emotion: analysis.emotion,
        intensity: round3(analysis.intensity),
        opinionated_response,
        tone: request.writing_voice.tone().to_string(),
    }))
}

/// POST /api/sentiment/opinionated-answer
///
/// Request body: OpinionatedRequest
/// {
///   "question": "Is GST good for small businesses?",
///   "topic": "gst" (optional, accepted but unused),
///   "writing_voice": "emotional" (default: aggressive),
///   "bias_level": "moderate" (default: strong)
/// }
async fn generate_opinionated_answer(
    State(state): State<AppState>,
    Json(request): Json<OpinionatedRequest>,
) -> Result<Json<ApiEnvelope<OpinionatedAnswer>>, AppError> {
    info!(
        "POST /api/sentiment/opinionated-answer - voice: {}, bias: {}",
        request.writing_voice, request.bias_level
    );

    if request.question.trim().is_empty() {
        return Err(AppError::Validation("Question cannot be empty".to_string()));
    }

    let analysis = state.scorer.analyze(&request.question).map_err(|e| {
        error!("Failed to score question: {}", e);
        AppError::Internal(format!("Failed to generate answer: {}", e))
    })?;

    let response = opinion_service::generate_opinionated_response(
        &request.question,
        &analysis,
        request.writing_voice,
        request.bias_level,
    );
    let opinionated_answer = opinion_service::enhance_response(
        response,
        request.writing_voice,
        analysis.sentiment,
        &mut rand::rng(),
    );

    info!("Answered question ({}, {})", analysis.sentiment, analysis.emotion);

    Ok(Json(ApiEnvelope::ok(OpinionatedAnswer {
        question: request.question,
        sentiment: analysis.sentiment,
        emotion: analysis.emotion,
        confidence: round3(analysis.confidence),
        opinionated_answer,
        writing_voice: request.writing_voice,
        bias_level: request.bias_level,
        tone: format!("{} & Opinionated", request.writing_voice.title()),
    })))
}

/// POST /api/sentiment/ca-opinion
///
/// Marketing-voice answer for CA practice questions
async fn ca_opinionated_response(
    State(state): State<AppState>,
    Json(request): Json<CaOpinionRequest>,
) -> Result<Json<ApiEnvelope<CaOpinion>>, AppError> {
    let question = request.question.unwrap_or_default();
    info!("POST /api/sentiment/ca-opinion - question length: {}", question.len());

    if question.trim().is_empty() {
        return Err(AppError::Validation("Question required".to_string()));
    }

    let analysis = state.scorer.analyze(&question).map_err(|e| {
        error!("CA opinion failed: {}", e);
        AppError::Internal(e.to_string())
    })?;

    let answer = marketing_service::generate_ca_marketing_response(&question, &analysis);

    Ok(Json(ApiEnvelope::ok(CaOpinion {
        answer,
        sentiment: analysis.sentiment,
        emotion: analysis.emotion,
        tone: "Aggressive Marketing Voice".to_string(),
        bias: "Opinionated & Research-Backed".to_string(),
    })))
}
