use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_SERVICE_NAME: &str = "sentiment-api";
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("LOKI_ENABLED is set but LOKI_URL is missing")]
    MissingLokiUrl,
    #[error("invalid LOKI_URL '{url}': {reason}")]
    InvalidLokiUrl { url: String, reason: String },
    #[error("invalid log filter '{0}'")]
    InvalidFilter(String),
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Where and how the sentiment API emits its `tracing` events
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub service_name: String,
    pub environment: String,
    /// Ship events to Loki in addition to stdout. Only honored with the `loki` feature.
    pub loki_enabled: bool,
    pub loki_url: Option<String>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `LOKI_ENABLED` accepts "true" or "1"
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let loki_enabled = lookup("LOKI_ENABLED")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
            .unwrap_or(false);

        Self {
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            service_name: lookup("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            loki_enabled,
            loki_url: lookup("LOKI_URL").filter(|url| !url.trim().is_empty()),
        }
    }

    /// The Loki endpoint to ship to, if shipping is switched on
    pub fn loki_target(&self) -> Result<Option<&str>, LoggingError> {
        match (self.loki_enabled, self.loki_url.as_deref()) {
            (false, _) => Ok(None),
            (true, Some(url)) => Ok(Some(url)),
            (true, None) => Err(LoggingError::MissingLokiUrl),
        }
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.log_level).map_err(|_| LoggingError::InvalidFilter(self.log_level.clone()))
    }
}

/// Install the global subscriber. Call from inside the tokio runtime: the Loki
/// layer spawns its shipping task.
pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter = config.env_filter()?;

    match config.loki_target()? {
        #[cfg(feature = "loki")]
        Some(url) => {
            init_with_loki(&config, filter, url)?;
            tracing::info!("Logging for {} to stdout and Loki at {}", config.service_name, url);
            Ok(())
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .try_init()
                .map_err(|e| LoggingError::Install(e.to_string()))?;
            tracing::info!("Logging for {} ({}) to stdout", config.service_name, config.environment);
            Ok(())
        }
    }
}

#[cfg(feature = "loki")]
fn init_with_loki(config: &LoggingConfig, filter: EnvFilter, loki_url: &str) -> Result<(), LoggingError> {
    let invalid = |reason: String| LoggingError::InvalidLokiUrl { url: loki_url.to_string(), reason };

    let url = url::Url::parse(loki_url).map_err(|e| invalid(e.to_string()))?;
    let (loki_layer, task) = tracing_loki::builder()
        .label("service", &config.service_name)
        .and_then(|b| b.label("environment", &config.environment))
        .and_then(|b| b.label("version", env!("CARGO_PKG_VERSION")))
        .and_then(|b| b.build_url(url))
        .map_err(|e| invalid(e.to_string()))?;

    tokio::spawn(task);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(loki_layer)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
