//! Static demo data served when live data is unavailable.
//!
//! Every value here is deterministic except the timestamps of [`quote`], which carry the
//! time of the call.

use chrono::{SecondsFormat, Utc};

use crate::{HistoricalPoint, Profile, Quote, SearchHit};

/// Instruments offered when the search quota is exhausted. The first three double as the
/// list offered on any other search failure.
const INSTRUMENTS: [(&str, &str); 5] = [
    ("AAPL", "Apple Inc."),
    ("GOOGL", "Alphabet Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("TSLA", "Tesla, Inc."),
    ("AMZN", "Amazon.com, Inc."),
];

const SEARCH_FAILURE_LEN: usize = 3;

const PRICE: f64 = 175.43;
const CHANGE: f64 = 2.15;
const CHANGE_PERCENT: f64 = 1.24;
const VOLUME: u64 = 45_678_900;

/// `(date, open, high, low, close, volume)`
const HISTORY: [(&str, f64, f64, f64, f64, u64); 5] = [
    ("2024-01-01", 170.00, 175.50, 169.80, 175.43, 45_678_900),
    ("2024-01-02", 175.43, 178.20, 174.10, 177.89, 52_341_200),
    ("2024-01-03", 177.89, 179.45, 176.30, 178.12, 48_923_400),
    ("2024-01-04", 178.12, 180.67, 177.55, 179.34, 51_234_500),
    ("2024-01-05", 179.34, 181.23, 178.90, 180.45, 47_856_300),
];

pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn matching(query: &str, len: usize) -> Vec<SearchHit> {
    let needle = query.to_lowercase();
    INSTRUMENTS[..len]
        .iter()
        .filter(|(symbol, name)| {
            symbol.to_lowercase().contains(&needle) || name.to_lowercase().contains(&needle)
        })
        .map(|(symbol, name)| SearchHit {
            symbol: (*symbol).to_string(),
            name: (*name).to_string(),
            instrument_type: "Equity".to_string(),
            region: "United States".to_string(),
            currency: "USD".to_string(),
        })
        .collect()
}

/// The five-instrument list, filtered by a case-insensitive substring of symbol or name.
pub fn search_rate_limited(query: &str) -> Vec<SearchHit> {
    matching(query, INSTRUMENTS.len())
}

/// The three-instrument list, filtered like [`search_rate_limited`].
pub fn search_failure(query: &str) -> Vec<SearchHit> {
    matching(query, SEARCH_FAILURE_LEN)
}

/// The fixed quote, labelled with the upper-cased `symbol` and stamped with the current time.
pub fn quote(symbol: &str) -> Quote {
    Quote {
        symbol: symbol.to_uppercase(),
        price: PRICE,
        change: CHANGE,
        change_percent: CHANGE_PERCENT,
        volume: VOLUME,
        last_updated: now_rfc3339(),
    }
}

/// The static company profile (Apple Inc.).
pub fn profile() -> Profile {
    Profile {
        symbol: "AAPL".to_string(),
        name: "Apple Inc.".to_string(),
        price: PRICE,
        change: CHANGE,
        change_percent: CHANGE_PERCENT,
        volume: VOLUME,
        market_cap: 2_750_000_000_000,
        pe_ratio: 28.5,
        eps: 6.15,
        dividend: 0.96,
        dividend_yield: 0.55,
        high_52_week: 198.23,
        low_52_week: 124.17,
        avg_volume: 52_000_000,
        beta: 1.29,
        sector: "Technology".to_string(),
        industry: "Consumer Electronics".to_string(),
        description: "Apple Inc. designs, manufactures, and markets smartphones, personal \
                      computers, tablets, wearables, and accessories worldwide."
            .to_string(),
        employees: 164_000,
        founded: "1976".to_string(),
        headquarters: "Cupertino, CA".to_string(),
        website: "https://www.apple.com".to_string(),
    }
}

/// The static profile relabelled as `symbol` (upper-cased) and carrying `quote`'s market data.
pub fn profile_for(symbol: &str, quote: &Quote) -> Profile {
    Profile {
        symbol: symbol.to_uppercase(),
        price: quote.price,
        change: quote.change,
        change_percent: quote.change_percent,
        volume: quote.volume,
        ..profile()
    }
}

/// The fixed five-day series, oldest first.
pub fn history() -> Vec<HistoricalPoint> {
    HISTORY
        .iter()
        .map(|&(date, open, high, low, close, volume)| HistoricalPoint {
            date: date.to_string(),
            open,
            high,
            low,
            close,
            volume,
        })
        .collect()
}
