use serde::{Deserialize, Serialize};

/// One OHLCV bar of a historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// `YYYY-MM-DD` for daily and coarser series, `YYYY-MM-DD HH:MM:SS` for intraday.
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}
