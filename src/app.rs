use axum::routing::get;
use axum::Router;
use http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::warn;

use crate::routes::{health, sentiment};
use crate::state::AppState;

pub fn create_app(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::<AppState>::new()
        .route("/", get(health::service_info))
        .nest("/health", health::router())
        .nest("/api/sentiment", sentiment::router())
        .layer(ServiceBuilder::new().layer(cors_layer(cors_allowed_origins)))
        .with_state(state)
}

/// Credentials are allowed, so methods and headers mirror the request instead of using `*`
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
