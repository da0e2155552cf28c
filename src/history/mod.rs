mod api;
mod model;
mod params;
mod wire;

pub use model::HistoricalPoint;
pub use params::Interval;

use crate::{AvClient, AvError};

/// Fetches the OHLCV series of `symbol` at `interval`.
///
/// Points are ordered newest first and capped at the 100 most recent.
///
/// # Errors
///
/// Returns [`AvError::RateLimited`] for a `"Note"`, [`AvError::Api`] for an `"Error Message"`,
/// [`AvError::MissingField`] when the interval's series key is absent, and transport or
/// parse errors otherwise.
pub async fn fetch(
    client: &AvClient,
    symbol: &str,
    interval: Interval,
) -> Result<Vec<HistoricalPoint>, AvError> {
    api::fetch_series(client, symbol, interval).await
}

/// Parses a raw time-series response body for `interval`.
///
/// # Errors
///
/// Same as [`fetch`], minus the transport errors.
pub fn parse(body: &str, interval: Interval) -> Result<Vec<HistoricalPoint>, AvError> {
    api::parse_series(body, interval)
}
