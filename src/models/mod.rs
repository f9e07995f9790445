//! Data models for the ClapMoney backend

use serde::{Deserialize, Serialize};

/// One journaled trade as submitted by the browser client.
///
/// Every field is optional on the wire; absent or empty fields are replaced
/// with fallback text when the coaching prompt is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    /// Ticker or pair, e.g. "AAPL"
    pub symbol: Option<String>,
    /// Asset class; falls back to "Stock" in the prompt
    pub asset_type: Option<String>,
    /// "Long" or "Short"
    pub direction: Option<String>,
    /// Strategy / reason for entry
    pub strategy: Option<String>,
    /// Trader's notes / lesson learned
    pub notes: Option<String>,
}

/// Body of a POST /api/analyze request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeRequest {
    pub trade: Option<Trade>,
}
