use serde::{Deserialize, Serialize};

/// A market headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    /// Link to the full article. Demo items use `"#"`.
    pub url: String,
    /// The publishing outlet.
    pub source: String,
    /// RFC 3339 publication time.
    pub published_at: String,
}
