use serde::Deserialize;

use crate::core::wire::{Sentinels, de_opt_text};

/// The `OVERVIEW` response: a flat object of `PascalCase` keys.
#[derive(Deserialize)]
pub(crate) struct OverviewEnvelope {
    #[serde(flatten)]
    pub(crate) sentinels: Sentinels,
    #[serde(flatten)]
    pub(crate) overview: OverviewNode,
}

#[derive(Deserialize)]
pub(crate) struct OverviewNode {
    #[serde(rename = "Symbol", default, deserialize_with = "de_opt_text")]
    pub(crate) symbol: Option<String>,
    #[serde(rename = "Name", default, deserialize_with = "de_opt_text")]
    pub(crate) name: Option<String>,
    #[serde(rename = "Description", default, deserialize_with = "de_opt_text")]
    pub(crate) description: Option<String>,
    #[serde(rename = "Sector", default, deserialize_with = "de_opt_text")]
    pub(crate) sector: Option<String>,
    #[serde(rename = "Industry", default, deserialize_with = "de_opt_text")]
    pub(crate) industry: Option<String>,
    #[serde(rename = "Address", default, deserialize_with = "de_opt_text")]
    pub(crate) address: Option<String>,
    #[serde(rename = "OfficialSite", default, deserialize_with = "de_opt_text")]
    pub(crate) official_site: Option<String>,
    #[serde(
        rename = "FullTimeEmployees",
        default,
        deserialize_with = "de_opt_text"
    )]
    pub(crate) full_time_employees: Option<String>,
    #[serde(
        rename = "MarketCapitalization",
        default,
        deserialize_with = "de_opt_text"
    )]
    pub(crate) market_capitalization: Option<String>,
    #[serde(rename = "PERatio", default, deserialize_with = "de_opt_text")]
    pub(crate) pe_ratio: Option<String>,
    #[serde(rename = "EPS", default, deserialize_with = "de_opt_text")]
    pub(crate) eps: Option<String>,
    #[serde(rename = "DividendPerShare", default, deserialize_with = "de_opt_text")]
    pub(crate) dividend_per_share: Option<String>,
    #[serde(rename = "DividendYield", default, deserialize_with = "de_opt_text")]
    pub(crate) dividend_yield: Option<String>,
    #[serde(rename = "52WeekHigh", default, deserialize_with = "de_opt_text")]
    pub(crate) week_52_high: Option<String>,
    #[serde(rename = "52WeekLow", default, deserialize_with = "de_opt_text")]
    pub(crate) week_52_low: Option<String>,
    #[serde(
        rename = "50DayMovingAverage",
        default,
        deserialize_with = "de_opt_text"
    )]
    pub(crate) moving_average_50_day: Option<String>,
    #[serde(rename = "Beta", default, deserialize_with = "de_opt_text")]
    pub(crate) beta: Option<String>,
}
