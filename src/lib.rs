//! vantage-rs: a resilient Alpha Vantage client.
//!
//! The crate has two layers:
//!
//! - Strict `fetch` functions in [`search`], [`quote`], [`profile`] and [`history`] that map
//!   the upstream's numbered-key JSON onto stable records and report every failure as an
//!   [`AvError`].
//! - [`QuoteGateway`], which wraps those functions and substitutes deterministic demo data
//!   from [`demo`] whenever the upstream is rate limited, errors, or is unreachable. It never
//!   fails, which makes it suitable as a UI data source.
//!
//! Display helpers live in [`format`] and are re-exported at the crate root.
//!
//! The API key is taken from the builder, else from `ALPHA_VANTAGE_API_KEY`, else `"demo"`.

pub mod core;
pub mod demo;
pub mod format;
mod gateway;
pub mod history;
pub mod news;
pub mod profile;
pub mod quote;
pub mod search;

pub use crate::core::client::{API_KEY_ENV, DEMO_API_KEY};
pub use crate::core::{AvClient, AvClientBuilder, AvError, Backoff, RetryConfig};
pub use format::{format_market_cap, format_percentage, format_price, format_volume};
pub use gateway::QuoteGateway;
pub use history::{HistoricalPoint, Interval};
pub use news::NewsItem;
pub use profile::Profile;
pub use quote::Quote;
pub use search::SearchHit;
