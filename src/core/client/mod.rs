//! Public client surface + builder.
//! Internals are split into `retry` (backoff policy) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use constants::{API_KEY_ENV, DEMO_API_KEY};
pub use retry::{Backoff, RetryConfig};

use constants::{DEFAULT_BASE_URL, USER_AGENT};
use crate::core::{AvError, net};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client, the query endpoint and the API key.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct AvClient {
    http: Client,
    base_url: Url,
    api_key: String,
    retry: RetryConfig,
}

impl Default for AvClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl AvClient {
    /// Create a new builder.
    pub fn builder() -> AvClientBuilder {
        AvClientBuilder::default()
    }

    /// The API key sent with every request.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The query endpoint all requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Builds `<base>?function=<function>&<params..>&apikey=<key>`.
    pub(crate) fn endpoint(&self, function: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("function", function);
            for (k, v) in params {
                qp.append_pair(k, v);
            }
            qp.append_pair("apikey", &self.api_key);
        }
        url
    }

    /// Issues a GET and returns the body of a successful response.
    ///
    /// `endpoint` and `key` only name the fixture when recording in `test-mode`.
    pub(crate) async fn get_body(
        &self,
        url: Url,
        endpoint: &str,
        key: &str,
    ) -> Result<String, AvError> {
        let req = self
            .http
            .get(url.clone())
            .header("accept", "application/json");
        let resp = self.send_with_retry(req).await?;

        if !resp.status().is_success() {
            return Err(AvError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(net::get_text(resp, endpoint, key, "json").await?)
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures an [`AvClient`].
#[derive(Default)]
pub struct AvClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl AvClientBuilder {
    /// Set the API key. Default: `$ALPHA_VANTAGE_API_KEY`, else `"demo"`.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the query endpoint (e.g., `https://www.alphavantage.co/query`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the retry policy. Default: [`RetryConfig::default`] (disabled).
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default endpoint cannot be parsed or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<AvClient, AvError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
            .unwrap_or_else(|| DEMO_API_KEY.to_string());

        let user_agent = self.user_agent.as_deref().unwrap_or(USER_AGENT);
        let mut httpb = reqwest::Client::builder().user_agent(user_agent);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(AvClient {
            http: httpb.build()?,
            base_url,
            api_key,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
