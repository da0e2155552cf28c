use crate::{
    AvClient, AvError, core::fallback::OrFallback, demo,
    history::{self, HistoricalPoint, Interval},
    news::{self, NewsItem},
    profile::{Profile, fetch_with_quote},
    quote::{self, Quote},
    search::{self, SearchHit},
};

/// A data source that always answers.
///
/// Each operation calls the matching strict `fetch` function and, when it fails for any
/// reason (rate limit, upstream error message, missing data, transport or parse failure),
/// substitutes the deterministic values of the [`demo`](crate::demo) module. None of the
/// methods return an error.
///
/// The gateway holds nothing but a client configuration; clones are independent and
/// concurrent calls do not interact.
///
/// # Example
///
/// ```no_run
/// # use vantage_rs::{Interval, QuoteGateway};
/// # #[tokio::main]
/// # async fn main() {
/// let gateway = QuoteGateway::default();
///
/// let quote = gateway.quote("MSFT").await;
/// println!("{} last traded at {}", quote.symbol, vantage_rs::format_price(quote.price));
///
/// let bars = gateway.history("MSFT", Interval::Weekly).await;
/// println!("fetched {} weekly bars", bars.len());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteGateway {
    client: AvClient,
}

impl QuoteGateway {
    /// Creates a gateway backed by `client`.
    pub fn new(client: &AvClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// The client used for upstream requests.
    pub const fn client(&self) -> &AvClient {
        &self.client
    }

    /// Searches instruments by symbol or name.
    ///
    /// An empty query yields an empty list without a request. When the quota is exhausted
    /// the five-instrument demo list is filtered by `query`; on any other failure the
    /// three-instrument list is.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn search(&self, query: &str) -> Vec<SearchHit> {
        search::fetch(&self.client, query)
            .await
            .or_fallback("search", |e| match e {
                AvError::RateLimited(_) => demo::search_rate_limited(query),
                _ => demo::search_failure(query),
            })
    }

    /// Fetches the latest quote, or the demo quote labelled with the upper-cased `symbol`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn quote(&self, symbol: &str) -> Quote {
        quote::fetch(&self.client, symbol)
            .await
            .or_fallback("quote", |_| demo::quote(symbol))
    }

    /// Fetches the quote and then the company overview.
    ///
    /// When the overview is rate limited or unknown, the demo profile carries the quote's
    /// market data. When the overview request itself fails, a fresh quote is fetched for
    /// that purpose.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn profile(&self, symbol: &str) -> Profile {
        let quote = self.quote(symbol).await;
        let result = fetch_with_quote(&self.client, symbol, &quote).await;

        let request_failed = matches!(
            &result,
            Err(e) if !matches!(e, AvError::RateLimited(_) | AvError::MissingField(_))
        );
        let quote = if request_failed {
            self.quote(symbol).await
        } else {
            quote
        };

        result.or_fallback("profile", |_| demo::profile_for(symbol, &quote))
    }

    /// Fetches up to the 100 most recent bars at `interval`, newest first, or the demo series.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn history(&self, symbol: &str, interval: Interval) -> Vec<HistoricalPoint> {
        history::fetch(&self.client, symbol, interval)
            .await
            .or_fallback("history", |_| demo::history())
    }

    /// Demo headlines for `symbol`, or for the market as a whole.
    pub fn news(&self, symbol: Option<&str>) -> Vec<NewsItem> {
        news::market_news(symbol)
    }
}
