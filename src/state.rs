use std::sync::Arc;

use crate::services::sentiment_service::SentimentScorer;

#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<SentimentScorer>,
}

impl AppState {
    pub fn new(scorer: SentimentScorer) -> Self {
        Self { scorer: Arc::new(scorer) }
    }
}
