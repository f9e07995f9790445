//! Trade analysis route definitions

use axum::{routing::post, Router};

use crate::handlers::analyze::{analyze_trade, method_not_allowed, preflight};
use crate::state::AppState;

pub fn analyze_routes() -> Router<AppState> {
    Router::new().route(
        "/api/analyze",
        post(analyze_trade)
            .options(preflight)
            .fallback(method_not_allowed),
    )
}
