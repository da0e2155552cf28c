use serde::Deserialize;

use crate::core::wire::{Sentinels, de_opt_text};

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(flatten)]
    pub(crate) sentinels: Sentinels,
    #[serde(rename = "bestMatches", default)]
    pub(crate) best_matches: Option<Vec<MatchNode>>,
}

/// One entry of `bestMatches`. Only the keys we surface are mapped.
#[derive(Deserialize)]
pub(crate) struct MatchNode {
    #[serde(rename = "1. symbol", default, deserialize_with = "de_opt_text")]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "2. name", default, deserialize_with = "de_opt_text")]
    pub(crate) name: Option<String>,
    #[serde(rename = "3. type", default, deserialize_with = "de_opt_text")]
    pub(crate) instrument_type: Option<String>,
    #[serde(rename = "4. region", default, deserialize_with = "de_opt_text")]
    pub(crate) region: Option<String>,
    #[serde(rename = "8. currency", default, deserialize_with = "de_opt_text")]
    pub(crate) currency: Option<String>,
}
