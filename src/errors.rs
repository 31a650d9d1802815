use axum::response::{IntoResponse, Json};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures raised while scoring text
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("text cannot be empty")]
    EmptyText,

    #[error("{engine} engine failed: {reason}")]
    Engine { engine: &'static str, reason: String },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> &str {
        match self {
            AppError::Validation(msg) | AppError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
