use crate::{
    core::{
        AvClient, AvError,
        wire::{count_or_zero, float_or_zero, text_or},
    },
    quote::{model::Quote, wire},
};

pub(super) async fn fetch_quote(client: &AvClient, symbol: &str) -> Result<Quote, AvError> {
    let url = client.endpoint("GLOBAL_QUOTE", &[("symbol", symbol)]);
    let body = client.get_body(url, "global_quote", symbol).await?;
    parse_quote(&body)
}

pub(super) fn parse_quote(body: &str) -> Result<Quote, AvError> {
    let env: wire::QuoteEnvelope = serde_json::from_str(body)?;
    env.sentinels.check()?;

    let node = env
        .quote
        .ok_or_else(|| AvError::MissingField("Global Quote".into()))?;

    // The percent is the one field a usable quote cannot do without.
    let change_percent = node
        .change_percent
        .ok_or_else(|| AvError::MissingField("10. change percent".into()))?
        .replacen('%', "", 1);

    Ok(Quote {
        symbol: text_or(node.symbol, "N/A"),
        price: float_or_zero(node.price.as_deref()),
        change: float_or_zero(node.change.as_deref()),
        change_percent: float_or_zero(Some(change_percent.as_str())),
        volume: count_or_zero(node.volume.as_deref()),
        last_updated: text_or(node.latest_trading_day, "N/A"),
    })
}
