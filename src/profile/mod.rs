mod api;
mod model;
mod wire;

pub use model::Profile;

use crate::{AvClient, AvError, quote::Quote};

/// Fetches the quote and then the company overview for `symbol`, and combines them.
///
/// # Errors
///
/// Propagates any error of [`quote::fetch`](crate::quote::fetch). For the overview step,
/// returns [`AvError::RateLimited`] for a `"Note"`, [`AvError::MissingField`] when the
/// response has no `"Symbol"`, and transport or parse errors otherwise.
pub async fn fetch(client: &AvClient, symbol: &str) -> Result<Profile, AvError> {
    let quote = crate::quote::fetch(client, symbol).await?;
    fetch_with_quote(client, symbol, &quote).await
}

/// Fetches the company overview for `symbol` and merges it with an already obtained `quote`.
///
/// # Errors
///
/// Same as the overview step of [`fetch`].
pub async fn fetch_with_quote(
    client: &AvClient,
    symbol: &str,
    quote: &Quote,
) -> Result<Profile, AvError> {
    let overview = api::fetch_overview(client, symbol).await?;
    Ok(api::build_profile(overview, quote))
}

/// Parses a raw `OVERVIEW` response body and merges it with `quote`.
///
/// # Errors
///
/// Same as [`fetch_with_quote`], minus the transport errors.
pub fn parse(body: &str, quote: &Quote) -> Result<Profile, AvError> {
    let overview = api::parse_overview(body)?;
    Ok(api::build_profile(overview, quote))
}
