mod api;
mod model;
mod wire;

pub use model::Quote;

use crate::{AvClient, AvError};

/// Fetches the latest quote for `symbol` from the `GLOBAL_QUOTE` function.
///
/// # Errors
///
/// Returns [`AvError::RateLimited`] for a `"Note"`, [`AvError::Api`] for an `"Error Message"`,
/// [`AvError::MissingField`] when the quote object or its change percent is absent, and
/// transport or parse errors otherwise.
pub async fn fetch(client: &AvClient, symbol: &str) -> Result<Quote, AvError> {
    api::fetch_quote(client, symbol).await
}

/// Parses a raw `GLOBAL_QUOTE` response body.
///
/// # Errors
///
/// Same as [`fetch`], minus the transport errors.
pub fn parse(body: &str) -> Result<Quote, AvError> {
    api::parse_quote(body)
}
