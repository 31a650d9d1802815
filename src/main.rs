use tokio::net::TcpListener;

use ca_sentiment_api::app;
use ca_sentiment_api::config::ServerConfig;
use ca_sentiment_api::logging::{init_logging, LoggingConfig};
use ca_sentiment_api::services::sentiment_service::SentimentScorer;
use ca_sentiment_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // before anything that logs
    init_logging(LoggingConfig::from_env())?;

    let config = ServerConfig::from_env()?;

    let state = AppState::new(SentimentScorer::with_default_engines());
    let app = app::create_app(state, &config.cors_allowed_origins);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Sentiment API running at http://{}/", addr);
    tracing::info!("CORS origins: {:?}", config.cors_allowed_origins);

    axum::serve(listener, app).await?;

    Ok(())
}
