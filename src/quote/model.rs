use serde::{Deserialize, Serialize};

/// A real-time price snapshot for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// The ticker symbol.
    pub symbol: String,
    /// The last traded price.
    pub price: f64,
    /// Absolute change against the previous close.
    pub change: f64,
    /// Relative change against the previous close, in percent (`1.24` means 1.24%).
    pub change_percent: f64,
    /// Shares traded in the latest session.
    pub volume: u64,
    /// The latest trading day as reported upstream, or an RFC 3339 timestamp for demo data.
    pub last_updated: String,
}
