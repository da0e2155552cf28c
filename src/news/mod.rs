//! Market headlines.
//!
//! Alpha Vantage's news feed needs a premium key, so this module serves a fixed pair of
//! headlines stamped relative to the current time.

mod model;

pub use model::NewsItem;

use chrono::{SecondsFormat, TimeDelta, Utc};

/// Returns the demo headlines for `symbol`, or for the market as a whole.
///
/// The first headline is published now, the second one day earlier.
pub fn market_news(symbol: Option<&str>) -> Vec<NewsItem> {
    let now = Utc::now();
    let yesterday = now - TimeDelta::days(1);
    let subject = symbol.filter(|s| !s.is_empty()).unwrap_or("Market");

    vec![
        NewsItem {
            title: format!("{subject} Shows Strong Performance"),
            summary: "Recent market analysis indicates positive trends...".to_string(),
            url: "#".to_string(),
            source: "Financial News".to_string(),
            published_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        },
        NewsItem {
            title: "Tech Sector Outlook Remains Positive".to_string(),
            summary: "Industry experts predict continued growth...".to_string(),
            url: "#".to_string(),
            source: "Tech Weekly".to_string(),
            published_at: yesterday.to_rfc3339_opts(SecondsFormat::Millis, true),
        },
    ]
}
