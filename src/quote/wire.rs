use serde::Deserialize;

use crate::core::wire::{Sentinels, de_opt_text};

#[derive(Deserialize)]
pub(crate) struct QuoteEnvelope {
    #[serde(flatten)]
    pub(crate) sentinels: Sentinels,
    #[serde(rename = "Global Quote", default)]
    pub(crate) quote: Option<GlobalQuoteNode>,
}

#[derive(Deserialize)]
pub(crate) struct GlobalQuoteNode {
    #[serde(rename = "01. symbol", default, deserialize_with = "de_opt_text")]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "05. price", default, deserialize_with = "de_opt_text")]
    pub(crate) price: Option<String>,
    #[serde(rename = "06. volume", default, deserialize_with = "de_opt_text")]
    pub(crate) volume: Option<String>,
    #[serde(
        rename = "07. latest trading day",
        default,
        deserialize_with = "de_opt_text"
    )]
    pub(crate) latest_trading_day: Option<String>,
    #[serde(rename = "09. change", default, deserialize_with = "de_opt_text")]
    pub(crate) change: Option<String>,
    #[serde(
        rename = "10. change percent",
        default,
        deserialize_with = "de_opt_text"
    )]
    pub(crate) change_percent: Option<String>,
}
