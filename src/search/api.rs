use crate::{
    core::{AvClient, AvError, wire::text_or},
    search::{model::SearchHit, wire},
};

pub(super) async fn fetch_matches(
    client: &AvClient,
    query: &str,
) -> Result<Vec<SearchHit>, AvError> {
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let url = client.endpoint("SYMBOL_SEARCH", &[("keywords", query)]);
    let body = client.get_body(url, "symbol_search", query).await?;
    parse_matches(&body)
}

pub(super) fn parse_matches(body: &str) -> Result<Vec<SearchHit>, AvError> {
    let env: wire::SearchEnvelope = serde_json::from_str(body)?;
    env.sentinels.check()?;

    Ok(env
        .best_matches
        .unwrap_or_default()
        .into_iter()
        .map(|m| SearchHit {
            symbol: text_or(m.symbol, "N/A"),
            name: text_or(m.name, "N/A"),
            instrument_type: text_or(m.instrument_type, "N/A"),
            region: text_or(m.region, "N/A"),
            currency: text_or(m.currency, "N/A"),
        })
        .collect())
}
