//! Pieces of the Alpha Vantage wire format shared by every endpoint.
//!
//! Upstream encodes almost every value as a JSON string (`"05. price": "123.4500"`), but a
//! few mirrors and older responses send bare numbers. Fields are therefore deserialized as
//! loose text and converted with [`parse_float`] / [`parse_int`], which accept the leading
//! numeric prefix of a string and reject anything else.

use serde::{Deserialize, Deserializer};

use crate::core::AvError;

/// Degradation markers that may appear at the top level of any response.
#[derive(Deserialize, Default)]
pub(crate) struct Sentinels {
    #[serde(rename = "Error Message", default, deserialize_with = "de_opt_text")]
    error_message: Option<String>,
    #[serde(rename = "Note", default, deserialize_with = "de_opt_text")]
    note: Option<String>,
}

impl Sentinels {
    pub(crate) fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|s| !s.is_empty())
    }

    pub(crate) fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|s| !s.is_empty())
    }

    /// Maps an `"Error Message"` (checked first) or a `"Note"` to the matching error.
    pub(crate) fn check(&self) -> Result<(), AvError> {
        if let Some(msg) = self.error_message() {
            return Err(AvError::Api {
                message: msg.to_string(),
                status: None,
            });
        }
        if let Some(note) = self.note() {
            return Err(AvError::RateLimited(note.to_string()));
        }
        Ok(())
    }
}

/// Accepts a string or a number; anything else (including `null`) is treated as absent.
pub(crate) fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Returns the text, or `default` when it is absent or empty.
pub(crate) fn text_or(v: Option<String>, default: &str) -> String {
    v.filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parses the longest decimal literal at the start of `s` (after leading whitespace).
///
/// `"1.23%"` yields `1.23`; `"None"`, `""` and `"-"` yield `None`.
pub(crate) fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut end = usize::from(matches!(b.first(), Some(b'+' | b'-')));

    let int_start = end;
    while end < b.len() && b[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < b.len() && b[end] == b'.' {
        let mut j = end + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - (end + 1);
        end = j;
    }
    if digits == 0 {
        return None;
    }

    if end < b.len() && matches!(b[end], b'e' | b'E') {
        let mut j = end + 1;
        if j < b.len() && matches!(b[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses the optionally signed run of digits at the start of `s`.
///
/// `"150.23"` yields `150`. Runs too long for `i64` saturate at its bounds.
pub(crate) fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let b = s.as_bytes();
    let mut end = usize::from(matches!(b.first(), Some(b'+' | b'-')));
    let start = end;
    while end < b.len() && b[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return None;
    }
    let saturated = if b[0] == b'-' { i64::MIN } else { i64::MAX };
    Some(s[..end].parse().unwrap_or(saturated))
}

/// Lenient float: absent or unparsable values become `0.0`.
pub(crate) fn float_or_zero(v: Option<&str>) -> f64 {
    v.and_then(parse_float).unwrap_or(0.0)
}

/// Lenient non-negative integer: absent, unparsable or negative values become `0`.
pub(crate) fn count_or_zero(v: Option<&str>) -> u64 {
    v.and_then(parse_int)
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0)
}
