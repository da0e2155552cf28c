//! Result-or-fallback combinator used by the gateway.

use crate::core::AvError;

/// Turns a strict result into a value by substituting a fallback on error.
pub(crate) trait OrFallback<T> {
    /// Returns the success value, or `fallback(&err)` after logging the absorbed error.
    ///
    /// `op` names the gateway operation in the log line.
    fn or_fallback(self, op: &'static str, fallback: impl FnOnce(&AvError) -> T) -> T;
}

impl<T> OrFallback<T> for Result<T, AvError> {
    fn or_fallback(self, op: &'static str, fallback: impl FnOnce(&AvError) -> T) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                log_degraded(op, &e);
                fallback(&e)
            }
        }
    }
}

#[cfg(feature = "tracing")]
fn log_degraded(op: &'static str, e: &AvError) {
    match e {
        AvError::RateLimited(note) => {
            tracing::info!(op, note = %note, "rate limited; serving demo data");
        }
        other => tracing::warn!(op, error = %other, "upstream failure; serving demo data"),
    }
}

#[cfg(not(feature = "tracing"))]
const fn log_degraded(_op: &'static str, _e: &AvError) {}
