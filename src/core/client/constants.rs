//! Centralized constants for default endpoints, UA and credentials.

/// Default UA: crate name and version.
pub(crate) const USER_AGENT: &str = concat!("vantage-rs/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint. Every operation is selected by the `function` parameter.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Environment variable consulted for the API key when none is set on the builder.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Key used when neither the builder nor the environment provides one.
pub const DEMO_API_KEY: &str = "demo";
