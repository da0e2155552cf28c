use serde::{Deserialize, Serialize};

/// Company fundamentals combined with the latest quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    /// Market capitalization in the listing currency.
    pub market_cap: u64,
    pub pe_ratio: f64,
    pub eps: f64,
    /// Dividend per share.
    pub dividend: f64,
    pub dividend_yield: f64,
    pub high_52_week: f64,
    pub low_52_week: f64,
    pub avg_volume: u64,
    pub beta: f64,
    pub sector: String,
    pub industry: String,
    pub description: String,
    pub employees: u64,
    pub founded: String,
    pub headquarters: String,
    pub website: String,
}
