use axum::{
    Json,
    Router,
    routing::get,
};
use serde_json::{json, Value};
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
}

async fn health() -> Json<Value> {
    info!("GET /health - Health check");
    Json(json!({ "status": "healthy", "service": "sentiment-api" }))
}

/// GET /
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "message": "CA Authority Sentiment Analysis API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "active",
        "description": "ML-powered sentiment analysis with opinionated responses for CAs"
    }))
}
