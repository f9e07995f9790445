//! Configuration management for the ClapMoney backend
//!
//! This module handles loading configuration from environment variables.
//! The only secret is the Gemini API key; everything else has a development
//! default.

use std::env;
use thiserror::Error;

/// Default base URL of the generative-language API.
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default model used for trade analysis.
const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Origin advertised in the CORS response headers.
const DEFAULT_ALLOWED_ORIGIN: &str = "https://clapmoneytrading.com";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. Absence is reported per-request rather than at
    /// startup, so the server can come up (and answer health checks) before
    /// the secret is provisioned.
    pub gemini_api_key: Option<String>,

    /// Base URL of the generative-language API
    pub gemini_api_base: String,

    /// Model name used for trade analysis
    pub gemini_model: String,

    /// Origin advertised in the CORS response headers
    pub allowed_origin: String,

    /// Server port
    pub port: u16,

    /// Log level (RUST_LOG)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());

        let gemini_api_base =
            env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string());

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        let allowed_origin =
            env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort("PORT must be a valid number".to_string()))?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            gemini_api_key,
            gemini_api_base,
            gemini_model,
            allowed_origin,
            port,
            log_level,
        })
    }

    /// Masked form of the API key, safe for logging
    pub fn api_key_masked(&self) -> String {
        match &self.gemini_api_key {
            Some(key) if key.len() > 8 => format!("{}****", &key[..4]),
            Some(_) => "****".to_string(),
            None => "<unset>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            gemini_api_key: None,
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            port: 3001,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_api_key_masked_hides_secret() {
        let config = Config {
            gemini_api_key: Some("AIzaSyExampleSecretKey".to_string()),
            ..base_config()
        };

        let masked = config.api_key_masked();
        assert!(masked.starts_with("AIza"));
        assert!(masked.ends_with("****"));
        assert!(!masked.contains("SecretKey"));
    }

    #[test]
    fn test_api_key_masked_short_key() {
        let config = Config {
            gemini_api_key: Some("abc".to_string()),
            ..base_config()
        };

        assert_eq!(config.api_key_masked(), "****");
    }

    #[test]
    fn test_api_key_masked_unset() {
        assert_eq!(base_config().api_key_masked(), "<unset>");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPort("PORT must be a valid number".to_string());
        assert!(err.to_string().contains("PORT"));
    }
}
