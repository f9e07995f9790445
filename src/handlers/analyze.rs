//! Trade analysis API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::AnalyzeRequest;
use crate::services::AnalysisService;

/// POST /api/analyze - Relay one trade to the Gemini API for feedback
///
/// The body is read leniently: a missing or malformed `trade` degrades to a
/// fully-defaulted prompt instead of a rejection.
pub async fn analyze_trade(
    State(analysis_service): State<Arc<AnalysisService>>,
    body: Option<Json<AnalyzeRequest>>,
) -> ApiResult<Json<Value>> {
    let trade = body
        .and_then(|Json(request)| request.trade)
        .unwrap_or_default();

    let analysis = analysis_service.analyze_trade(&trade).await?;

    Ok(Json(analysis))
}

/// OPTIONS /api/analyze - Browser preflight short-circuit
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Fallback for any other method on /api/analyze
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
