//! HTTP-level tests for the sentiment API.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; no socket is bound.
//! Most tests inject fixed-score engines so sentiment is known up front.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use ca_sentiment_api::app::create_app;
use ca_sentiment_api::errors::AnalyzerError;
use ca_sentiment_api::external::polarity_engine::PolarityEngine;
use ca_sentiment_api::models::PolarityScores;
use ca_sentiment_api::services::opinion_service::enhancement_candidates;
use ca_sentiment_api::services::sentiment_service::SentimentScorer;
use ca_sentiment_api::state::AppState;
use ca_sentiment_api::models::{Sentiment, WritingVoice};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct FixedEngine(PolarityScores);

impl PolarityEngine for FixedEngine {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn polarity_scores(&self, _text: &str) -> Result<PolarityScores, AnalyzerError> {
        Ok(self.0)
    }
}

struct BrokenEngine;

impl PolarityEngine for BrokenEngine {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn polarity_scores(&self, _text: &str) -> Result<PolarityScores, AnalyzerError> {
        Err(AnalyzerError::Engine { engine: "broken", reason: "lexicon missing".to_string() })
    }
}

/// App whose engines both report `compound`, with the given valence shares
fn fixed_app(compound: f64, pos: f64, neg: f64) -> Router {
    let scores = PolarityScores {
        compound,
        positive: pos,
        negative: neg,
        neutral: (1.0 - pos - neg).max(0.0),
        subjectivity: 0.5,
    };
    let scorer = SentimentScorer::new(Arc::new(FixedEngine(scores)), Arc::new(FixedEngine(scores)));
    create_app(AppState::new(scorer), &["http://localhost:3000".to_string()])
}

fn positive_app() -> Router {
    fixed_app(0.6, 0.5, 0.0)
}

fn negative_app() -> Router {
    fixed_app(-0.6, 0.0, 0.5)
}

fn neutral_app() -> Router {
    fixed_app(0.0, 0.0, 0.0)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_root_metadata() {
    let (status, body) = get(neutral_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "CA Authority Sentiment Analysis API");
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(neutral_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "service": "sentiment-api" }));
}

// ---------------------------------------------------------------------------
// /api/sentiment/analyze
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_analyze_empty_text_is_client_error() {
    let (status, body) = post_json(neutral_app(), "/api/sentiment/analyze", json!({ "text": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Text cannot be empty");
}

#[tokio::test]
async fn test_analyze_engine_failure_is_server_error() {
    let scorer = SentimentScorer::new(Arc::new(BrokenEngine), Arc::new(BrokenEngine));
    let app = create_app(AppState::new(scorer), &[]);
    let (status, body) = post_json(app, "/api/sentiment/analyze", json!({ "text": "GST" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Analysis failed: broken engine failed: lexicon missing");
}

#[tokio::test]
async fn test_analyze_neutral_voice_gst_positive() {
    let (status, body) = post_json(
        positive_app(),
        "/api/sentiment/analyze",
        json!({ "text": "Tell me about GST", "writing_voice": "neutral" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["confidence"], 0.6);
    assert_eq!(body["intensity"], 0.5);
    assert_eq!(body["tone"], "Professional and Factual");

    let text = body["opinionated_response"].as_str().unwrap();
    assert!(text.starts_with("Professional Analysis:"));
    assert!(text.contains("GST is a revolutionary reform that simplified India's complex tax structure. It's a masterstroke that unified the nation economically."));
}

#[tokio::test]
async fn test_analyze_defaults_to_aggressive_strong() {
    let (status, body) = post_json(negative_app(), "/api/sentiment/analyze", json!({ "text": "audit season" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tone"], "Bold and Direct");

    let text = body["opinionated_response"].as_str().unwrap();
    assert!(text.starts_with("Here's the brutal truth - Audit procedures"));
    assert!(text.contains("Bottom line: This is fundamentally flawed"));
}

#[tokio::test]
async fn test_analyze_rejects_unknown_voice() {
    let (status, _) = post_json(
        neutral_app(),
        "/api/sentiment/analyze",
        json!({ "text": "hi", "writing_voice": "sarcastic" }),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_analyze_with_real_engines() {
    let app = create_app(AppState::new(SentimentScorer::with_default_engines()), &[]);
    let (status, body) = post_json(
        app,
        "/api/sentiment/analyze",
        json!({ "text": "This is amazing and wonderful", "writing_voice": "emotional" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["emotion"], "joy");
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));
    assert!(body["opinionated_response"]
        .as_str()
        .unwrap()
        .starts_with("I'm genuinely excited to share this - "));
}

// ---------------------------------------------------------------------------
// /api/sentiment/opinionated-answer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_opinionated_answer_envelope() {
    let (status, body) = post_json(
        negative_app(),
        "/api/sentiment/opinionated-answer",
        json!({ "question": "Is GST hurting small firms?", "writing_voice": "aggressive", "bias_level": "moderate" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = &body["data"];
    assert_eq!(data["question"], "Is GST hurting small firms?");
    assert_eq!(data["sentiment"], "negative");
    assert_eq!(data["writing_voice"], "aggressive");
    assert_eq!(data["bias_level"], "moderate");
    assert_eq!(data["tone"], "Aggressive & Opinionated");

    let answer = data["opinionated_answer"].as_str().unwrap();
    assert!(answer.starts_with("The reality is harsh - GST implementation was chaotic"));
    assert!(!answer.contains("Bottom line"));

    let candidates = enhancement_candidates(WritingVoice::Aggressive, Sentiment::Negative);
    assert!(candidates.iter().any(|c| answer.ends_with(c)));
}

#[tokio::test]
async fn test_opinionated_answer_question_decides_topic() {
    let (status, body) = post_json(
        neutral_app(),
        "/api/sentiment/opinionated-answer",
        json!({ "question": "Is GST good?", "topic": "audit", "writing_voice": "neutral" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let answer = body["data"]["opinionated_answer"].as_str().unwrap();
    assert_eq!(
        answer,
        "Professional Analysis:\n\nGST brought systematic changes to Indian taxation, though implementation challenges remain.\n\nNote: This analysis is based on current regulatory frameworks and market conditions."
    );
    assert!(!answer.contains("Auditing provides assurance"));
}

#[tokio::test]
async fn test_opinionated_answer_topic_field_alone_selects_nothing() {
    let (_, body) = post_json(
        neutral_app(),
        "/api/sentiment/opinionated-answer",
        json!({ "question": "What do you think?", "topic": "cryptocurrency", "writing_voice": "neutral" }),
    )
    .await;

    let answer = body["data"]["opinionated_answer"].as_str().unwrap();
    assert_eq!(
        answer,
        "Professional Analysis:\n\n\n\nNote: This analysis is based on current regulatory frameworks and market conditions."
    );
}

#[tokio::test]
async fn test_opinionated_answer_balanced_counterpoints() {
    let (_, negative) = post_json(
        negative_app(),
        "/api/sentiment/opinionated-answer",
        json!({ "question": "income tax", "writing_voice": "balanced" }),
    )
    .await;
    assert!(negative["data"]["opinionated_answer"]
        .as_str()
        .unwrap()
        .contains("However, there are potential improvements that could address these concerns."));

    let (_, neutral) = post_json(
        neutral_app(),
        "/api/sentiment/opinionated-answer",
        json!({ "question": "income tax", "writing_voice": "balanced" }),
    )
    .await;
    let text = neutral["data"]["opinionated_answer"].as_str().unwrap();
    assert!(!text.contains("However,"));
    assert!(!text.contains("That said,"));
}

#[tokio::test]
async fn test_opinionated_answer_empty_question() {
    let (status, body) = post_json(
        neutral_app(),
        "/api/sentiment/opinionated-answer",
        json!({ "question": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Question cannot be empty");
}

// ---------------------------------------------------------------------------
// /api/sentiment/ca-opinion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_ca_opinion_linkedin() {
    let (status, body) = post_json(
        positive_app(),
        "/api/sentiment/ca-opinion",
        json!({ "question": "Should CAs be on LinkedIn?" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert!(data["answer"].as_str().unwrap().starts_with("LinkedIn is THE battleground"));
    assert_eq!(data["tone"], "Aggressive Marketing Voice");
    assert_eq!(data["bias"], "Opinionated & Research-Backed");
    assert_eq!(data["sentiment"], "positive");
}

#[tokio::test]
async fn test_ca_opinion_general_fallback() {
    let (_, body) = post_json(
        neutral_app(),
        "/api/sentiment/ca-opinion",
        json!({ "question": "How should I price my services?" }),
    )
    .await;
    let answer = body["data"]["answer"].as_str().unwrap();
    assert!(answer.starts_with("Here's my unfiltered take:\n\nThis requires strategic thinking, not blind following."));
}

#[tokio::test]
async fn test_ca_opinion_topic_keyword_still_gets_stock_sentence() {
    let (status, body) = post_json(
        neutral_app(),
        "/api/sentiment/ca-opinion",
        json!({ "question": "Thoughts on bitcoin?", "topic": "gst" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let answer = body["data"]["answer"].as_str().unwrap();
    assert!(answer.starts_with("Here's my unfiltered take:\n\nThis requires strategic thinking, not blind following."));
    assert!(!answer.contains("Cryptocurrency presents"));
    assert!(!answer.contains("GST brought"));
}

#[tokio::test]
async fn test_ca_opinion_missing_question() {
    let (status, body) = post_json(neutral_app(), "/api/sentiment/ca-opinion", json!({ "topic": "gst" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Question required");
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/sentiment/analyze")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = neutral_app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}
