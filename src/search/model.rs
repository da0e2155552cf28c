use serde::{Deserialize, Serialize};

/// A single instrument matching a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// The ticker symbol (e.g., "AAPL").
    pub symbol: String,
    /// The instrument's display name.
    pub name: String,
    /// The instrument type as reported upstream (e.g., "Equity", "ETF").
    #[serde(rename = "type")]
    pub instrument_type: String,
    /// The market region (e.g., "United States").
    pub region: String,
    /// The trading currency code.
    pub currency: String,
}
