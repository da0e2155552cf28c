//! Display formatters for prices, volumes, market caps and percentages.
//!
//! All functions are total. Fixed-point output rounds half away from zero; grouped output
//! uses `,` as the thousands separator and at most three fraction digits.

use rust_decimal::{Decimal, RoundingStrategy};

const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;
const THOUSAND: f64 = 1e3;

/// Formats a market capitalization as `$2.75T`, `$1.20B`, `$3.40M`, or `$950,000`.
///
/// ```
/// assert_eq!(vantage_rs::format_market_cap(2_750_000_000_000.0), "$2.75T");
/// ```
#[must_use]
pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= TRILLION {
        format!("${}T", fixed(market_cap / TRILLION, 2))
    } else if market_cap >= BILLION {
        format!("${}B", fixed(market_cap / BILLION, 2))
    } else if market_cap >= MILLION {
        format!("${}M", fixed(market_cap / MILLION, 2))
    } else {
        format!("${}", grouped(market_cap))
    }
}

/// Formats a share volume as `1.20B`, `45.68M`, `12.50K`, or `999`.
#[must_use]
pub fn format_volume(volume: f64) -> String {
    if volume >= BILLION {
        format!("{}B", fixed(volume / BILLION, 2))
    } else if volume >= MILLION {
        format!("{}M", fixed(volume / MILLION, 2))
    } else if volume >= THOUSAND {
        format!("{}K", fixed(volume / THOUSAND, 2))
    } else {
        grouped(volume)
    }
}

/// Formats a price with two decimals, e.g. `$175.43`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${}", fixed(price, 2))
}

/// Formats a percentage with two decimals and an explicit `+` for non-negative values.
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    let sign = if percentage >= 0.0 { "+" } else { "" };
    format!("{sign}{}%", fixed(percentage, 2))
}

fn to_decimal(value: f64, dp: u32) -> Option<Decimal> {
    let strategy = RoundingStrategy::MidpointAwayFromZero;
    let d = Decimal::from_f64_retain(value)?;
    Some(d.round_dp_with_strategy(dp, strategy))
}

fn fixed(value: f64, dp: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // Sign is handled here so that `-0.0` prints as `0.00`.
    let sign = if value < 0.0 { "-" } else { "" };
    let precision = dp as usize;
    match to_decimal(value.abs(), dp) {
        Some(d) => format!("{sign}{d:.precision$}"),
        None => format!("{sign}{:.precision$}", value.abs()),
    }
}

fn grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let text = to_decimal(value.abs(), 3)
        .map(|d| d.normalize().to_string())
        .unwrap_or_else(|| format!("{:.0}", value.abs()));

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    out.push_str(sign);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}
