use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// The [`QuoteGateway`](crate::QuoteGateway) never returns it; it is surfaced only by the
/// strict `fetch` functions of each module.
#[derive(Debug, Error)]
pub enum AvError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON, or did not have the expected shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The upstream answered with an `"Error Message"` field.
    #[error("Alpha Vantage error: {message}")]
    Api {
        /// The message reported by the upstream.
        message: String,
        /// The HTTP status code, when one is associated with the failure.
        status: Option<u16>,
    },

    /// The upstream answered with a `"Note"` field, meaning the API quota is exhausted.
    #[error("Alpha Vantage rate limit: {0}")]
    RateLimited(String),

    /// The response lacked the data key the operation expected.
    #[error("Data format unexpected or missing field: {0}")]
    MissingField(String),

    /// An interval string did not name a supported sampling granularity.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),
}
