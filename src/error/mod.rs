//! Centralized API error handling for the ClapMoney backend
//!
//! One closed error type covers every failure the analysis proxy can
//! surface, with per-kind HTTP status codes and the JSON bodies the browser
//! client expects.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type with HTTP status code mapping
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request used a method other than POST or OPTIONS.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The Gemini API key is missing from the process configuration.
    #[error("API key not configured.")]
    MissingApiKey,

    /// The language model API answered with a non-success status; the
    /// message is the provider's own `error.message` when present.
    #[error("{0}")]
    Upstream(String),

    /// The language model API could not be reached or returned an
    /// unparsable body.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Transport(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        // Log server errors
        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), error = %message, "Request failed");
        } else {
            tracing::debug!(status = %status.as_u16(), error = %message, "Request rejected");
        }

        // The client contract uses `message` for protocol misuse and
        // `error` for everything else.
        let body = match self {
            ApiError::MethodNotAllowed => json!({ "message": message }),
            _ => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

// Convenience conversions from common error types

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(format!("Invalid JSON from upstream: {}", err))
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::MissingApiKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Upstream("quota exceeded".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Transport("connection refused".to_string()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_messages_surface_verbatim() {
        assert_eq!(ApiError::MissingApiKey.to_string(), "API key not configured.");
        assert_eq!(
            ApiError::Upstream("quota exceeded".to_string()).to_string(),
            "quota exceeded"
        );
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method Not Allowed");
    }
}
