mod api;
mod model;
mod wire;

pub use model::SearchHit;

use crate::{AvClient, AvError};

/// Searches for instruments whose symbol or name matches `query`.
///
/// An empty query returns an empty list without touching the network.
///
/// # Errors
///
/// Returns [`AvError::RateLimited`] when upstream answers with a `"Note"`,
/// [`AvError::Api`] for an `"Error Message"`, and transport or parse errors otherwise.
pub async fn fetch(client: &AvClient, query: &str) -> Result<Vec<SearchHit>, AvError> {
    api::fetch_matches(client, query).await
}

/// Parses a raw `SYMBOL_SEARCH` response body.
///
/// # Errors
///
/// Same as [`fetch`], minus the transport errors.
pub fn parse(body: &str) -> Result<Vec<SearchHit>, AvError> {
    api::parse_matches(body)
}
