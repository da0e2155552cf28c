use serde::Deserialize;

use crate::core::wire::{Sentinels, de_opt_text};

/// The series lives under a key that depends on the interval, so everything besides the
/// sentinels is kept as raw JSON until the key is known.
#[derive(Deserialize)]
pub(crate) struct SeriesEnvelope {
    #[serde(flatten)]
    pub(crate) sentinels: Sentinels,
    #[serde(flatten)]
    pub(crate) rest: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize, Default)]
pub(crate) struct BarNode {
    #[serde(rename = "1. open", default, deserialize_with = "de_opt_text")]
    pub(crate) open: Option<String>,
    #[serde(rename = "2. high", default, deserialize_with = "de_opt_text")]
    pub(crate) high: Option<String>,
    #[serde(rename = "3. low", default, deserialize_with = "de_opt_text")]
    pub(crate) low: Option<String>,
    #[serde(rename = "4. close", default, deserialize_with = "de_opt_text")]
    pub(crate) close: Option<String>,
    #[serde(rename = "5. volume", default, deserialize_with = "de_opt_text")]
    pub(crate) volume: Option<String>,
}
