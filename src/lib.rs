//! ClapMoney Trading Backend Library
//!
//! This library exports the core modules for the ClapMoney trade analysis
//! server: a thin HTTP proxy that turns journaled trades into AI coaching
//! feedback via the Gemini API.

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use config::Config;
use state::AppState;

/// Build the application router with all routes, shared state, and layers.
pub fn app(config: &Config) -> Router {
    let app_state = AppState::from_config(config);

    let allow_origin = HeaderValue::from_str(&config.allowed_origin)
        .expect("ALLOWED_ORIGIN must be a valid header value");

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(routes::analyze_routes())
        .with_state(app_state)
        .layer(axum::middleware::from_fn(middleware::request_tracing))
        // Announcement only: the allowed origin is set on every response and
        // the incoming Origin header is never checked.
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            allow_origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

async fn root() -> &'static str {
    "ClapMoney Trading API Server"
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint
async fn health_check() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
