pub mod chat;
pub mod health;
pub mod spacedata;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::middleware::logging;
use crate::state::AppState;

/// Outer request deadline, above the slowest handler path (agent call plus
/// persistence) so per-client timeouts fire first
const REQUEST_TIMEOUT: Duration = Duration::from_secs(75);

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.config);

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Chat relay
        .route("/api/chat", post(chat::send_message))
        .route("/api/chat/:thread_id", delete(chat::reset_thread))
        // Space data proxies
        .route("/nasa_asteroids_monitor", get(spacedata::asteroids_monitor))
        .route("/nasa_apod_gallery", get(spacedata::apod_gallery))
        .route("/nasa_earth_events", get(spacedata::earth_events))
        .route("/nasa_people_in_space", get(spacedata::people_in_space))
        .layer(middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &crate::config::Config) -> CorsLayer {
    if config.cors.enabled {
        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors.allow_origin(Any)
        } else {
            let parsed_origins: Vec<axum::http::HeaderValue> = config
                .cors
                .origins
                .iter()
                .filter_map(|o| o.parse::<axum::http::HeaderValue>().ok())
                .collect();

            cors.allow_origin(parsed_origins)
        }
    } else {
        CorsLayer::new()
    }
}
