use crate::{
    core::{
        AvClient, AvError,
        wire::{count_or_zero, float_or_zero, text_or},
    },
    profile::{model::Profile, wire},
    quote::Quote,
};

pub(super) async fn fetch_overview(
    client: &AvClient,
    symbol: &str,
) -> Result<wire::OverviewNode, AvError> {
    let url = client.endpoint("OVERVIEW", &[("symbol", symbol)]);
    let body = client.get_body(url, "overview", symbol).await?;
    parse_overview(&body)
}

/// `OVERVIEW` never carries an `"Error Message"`; unknown symbols come back as `{}`.
pub(super) fn parse_overview(body: &str) -> Result<wire::OverviewNode, AvError> {
    let env: wire::OverviewEnvelope = serde_json::from_str(body)?;
    if let Some(note) = env.sentinels.note() {
        return Err(AvError::RateLimited(note.to_string()));
    }
    if env.overview.symbol.as_deref().is_none_or(str::is_empty) {
        return Err(AvError::MissingField("Symbol".into()));
    }
    Ok(env.overview)
}

pub(super) fn build_profile(ov: wire::OverviewNode, quote: &Quote) -> Profile {
    Profile {
        symbol: text_or(ov.symbol, "N/A"),
        name: text_or(ov.name, "N/A"),
        price: quote.price,
        change: quote.change,
        change_percent: quote.change_percent,
        volume: quote.volume,
        market_cap: count_or_zero(ov.market_capitalization.as_deref()),
        pe_ratio: float_or_zero(ov.pe_ratio.as_deref()),
        eps: float_or_zero(ov.eps.as_deref()),
        dividend: float_or_zero(ov.dividend_per_share.as_deref()),
        dividend_yield: float_or_zero(ov.dividend_yield.as_deref()),
        high_52_week: float_or_zero(ov.week_52_high.as_deref()),
        low_52_week: float_or_zero(ov.week_52_low.as_deref()),
        // Upstream has no average-volume field; the 50-day average stands in for it.
        avg_volume: count_or_zero(ov.moving_average_50_day.as_deref()),
        beta: float_or_zero(ov.beta.as_deref()),
        sector: text_or(ov.sector, "N/A"),
        industry: text_or(ov.industry, "N/A"),
        description: text_or(ov.description, "No description available"),
        employees: count_or_zero(ov.full_time_employees.as_deref()),
        founded: "N/A".to_string(),
        headquarters: text_or(ov.address, "N/A"),
        website: text_or(ov.official_site, "N/A"),
    }
}
