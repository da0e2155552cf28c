use std::collections::HashMap;

use crate::{
    core::{
        AvClient, AvError,
        wire::{count_or_zero, float_or_zero},
    },
    history::{Interval, model::HistoricalPoint, wire},
};

/// Upper bound on the number of points returned.
pub(crate) const MAX_POINTS: usize = 100;

pub(super) async fn fetch_series(
    client: &AvClient,
    symbol: &str,
    interval: Interval,
) -> Result<Vec<HistoricalPoint>, AvError> {
    let mut params = vec![("symbol", symbol)];
    if interval.is_intraday() {
        params.push(("interval", interval.as_str()));
    }
    let url = client.endpoint(interval.function(), &params);

    let endpoint = format!("history_{}", interval.as_str());
    let body = client.get_body(url, &endpoint, symbol).await?;
    parse_series(&body, interval)
}

pub(super) fn parse_series(
    body: &str,
    interval: Interval,
) -> Result<Vec<HistoricalPoint>, AvError> {
    let mut env: wire::SeriesEnvelope = serde_json::from_str(body)?;
    env.sentinels.check()?;

    let key = interval.series_key();
    let raw = env
        .rest
        .remove(key)
        .ok_or_else(|| AvError::MissingField(key.into()))?;
    let bars: HashMap<String, serde_json::Value> = serde_json::from_value(raw)?;

    let mut points: Vec<HistoricalPoint> = bars
        .into_iter()
        .map(|(date, value)| {
            // A bar that is not an object contributes a zero-filled point.
            let bar: wire::BarNode = serde_json::from_value(value).unwrap_or_default();
            (date, bar)
        })
        .map(|(date, bar)| HistoricalPoint {
            date,
            open: float_or_zero(bar.open.as_deref()),
            high: float_or_zero(bar.high.as_deref()),
            low: float_or_zero(bar.low.as_deref()),
            close: float_or_zero(bar.close.as_deref()),
            volume: count_or_zero(bar.volume.as_deref()),
        })
        .collect();

    // Timestamps are zero-padded, so lexical order is chronological order.
    points.sort_unstable_by(|a, b| b.date.cmp(&a.date));
    points.truncate(MAX_POINTS);
    Ok(points)
}
