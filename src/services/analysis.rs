//! Trade analysis service
//!
//! Composes the coaching prompt for one journaled trade and performs the
//! single outbound call to the Gemini generateContent endpoint.

use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::Trade;

/// Upstream request timeout. There is no hosting-platform execution limit
/// here, so a hung provider call must not hang the request forever.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback text for optional trade fields.
const NOT_SPECIFIED: &str = "Not specified";

/// Fallback asset class.
const DEFAULT_ASSET_TYPE: &str = "Stock";

/// Message returned when the provider's error body carries no message.
const GENERIC_UPSTREAM_ERROR: &str = "Failed to fetch analysis from the Gemini API.";

/// Client for the Gemini generative-language API.
pub struct AnalysisService {
    client: Client,
    api_base: String,
    model: String,
    api_key: Option<String>,
}

impl AnalysisService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(UPSTREAM_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_base: config.gemini_api_base.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    /// Request coaching feedback for one trade.
    ///
    /// The key check happens before any network activity. On success the
    /// provider's JSON response is returned unmodified.
    pub async fn analyze_trade(&self, trade: &Trade) -> ApiResult<Value> {
        let api_key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;

        let prompt = build_prompt(trade);

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        );

        let payload = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.json::<Value>().await.unwrap_or(Value::Null);
            let message = error_body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_UPSTREAM_ERROR)
                .to_string();

            tracing::error!(
                status = %status.as_u16(),
                model = %self.model,
                error = %message,
                "Gemini API returned an error"
            );

            return Err(ApiError::Upstream(message));
        }

        let analysis = response.json::<Value>().await?;
        Ok(analysis)
    }
}

/// Build the coaching prompt for one trade.
///
/// Absent or empty fields fall back to fixed text so the prompt always
/// carries all five detail lines.
fn build_prompt(trade: &Trade) -> String {
    format!(
        r#"Act as a professional trading coach. Analyze the following trade and provide constructive feedback.
Be concise and encouraging. Structure your feedback into "What Went Well" and "Areas for Improvement".

Trade Details:
- Asset: {} ({})
- Direction: {}
- Strategy / Reason for Entry: {}
- Trader's Notes / Lesson Learned: {}

Provide your analysis based only on this information."#,
        field_or(&trade.symbol, NOT_SPECIFIED),
        field_or(&trade.asset_type, DEFAULT_ASSET_TYPE),
        field_or(&trade.direction, NOT_SPECIFIED),
        field_or(&trade.strategy, NOT_SPECIFIED),
        field_or(&trade.notes, NOT_SPECIFIED),
    )
}

fn field_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_trade() -> Trade {
        Trade {
            symbol: Some("AAPL".to_string()),
            asset_type: Some("Stock".to_string()),
            direction: Some("Long".to_string()),
            strategy: Some("Breakout".to_string()),
            notes: Some("Held too long".to_string()),
        }
    }

    #[test]
    fn test_prompt_contains_trade_fields() {
        let prompt = build_prompt(&full_trade());

        for expected in ["AAPL", "Stock", "Long", "Breakout", "Held too long"] {
            assert!(prompt.contains(expected), "prompt missing {expected:?}");
        }
    }

    #[test]
    fn test_prompt_contains_section_headers() {
        let prompt = build_prompt(&full_trade());

        assert!(prompt.contains("What Went Well"));
        assert!(prompt.contains("Areas for Improvement"));
    }

    #[test]
    fn test_prompt_defaults_missing_optional_fields() {
        let trade = Trade {
            strategy: None,
            notes: None,
            ..full_trade()
        };

        let prompt = build_prompt(&trade);

        assert_eq!(prompt.matches(NOT_SPECIFIED).count(), 2);
        assert!(prompt.contains("Strategy / Reason for Entry: Not specified"));
        assert!(prompt.contains("Trader's Notes / Lesson Learned: Not specified"));
    }

    #[test]
    fn test_prompt_defaults_asset_type_to_stock() {
        let trade = Trade {
            asset_type: None,
            ..full_trade()
        };

        assert!(build_prompt(&trade).contains("(Stock)"));
    }

    #[test]
    fn test_prompt_handles_fully_empty_trade() {
        let prompt = build_prompt(&Trade::default());

        assert!(prompt.contains("- Asset: Not specified (Stock)"));
        assert!(prompt.contains("- Direction: Not specified"));
    }

    #[test]
    fn test_blank_fields_fall_back_like_missing_ones() {
        let trade = Trade {
            notes: Some("   ".to_string()),
            ..full_trade()
        };

        assert!(build_prompt(&trade).contains("Trader's Notes / Lesson Learned: Not specified"));
    }
}
