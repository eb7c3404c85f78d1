//! HTTP `FeedSource` fetching the upstream medal table.
//!
//! [`FeedSource`] is synchronous so the core pipeline stays embeddable in
//! synchronous contexts. This source bridges the async `reqwest` client by
//! blocking on a Tokio runtime it owns. The fetch is one-shot: no retries,
//! no streaming, and any schema deviation fails the load.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use podium_data::{FeedSource, HttpFeedSource, HttpFeedSourceConfig};
//!
//! let config = HttpFeedSourceConfig::new("https://example.org/medals.json")
//!     .with_timeout(Duration::from_secs(10));
//! let source = HttpFeedSource::with_config(config)?;
//! let feed = source.load()?;
//! # Ok::<(), podium_data::FeedError>(())
//! ```

use std::time::Duration;

use podium_core::MedalFeed;
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use crate::{FeedError, FeedSource, parse_feed};

/// Default user agent for feed requests.
pub const DEFAULT_USER_AGENT: &str = "podium-feed/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpFeedSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFeedSourceConfig {
    /// Absolute URL of the medal-table JSON.
    pub url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpFeedSourceConfig {
    /// Create a configuration for `url` with default timeout and user agent.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Fetches the medal feed over HTTP(S).
///
/// When called from within a multi-threaded Tokio runtime the request runs on
/// that runtime via [`tokio::task::block_in_place`]; otherwise the source's
/// own current-thread runtime drives it.
pub struct HttpFeedSource {
    client: Client,
    url: Url,
    config: HttpFeedSourceConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpFeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFeedSource")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl HttpFeedSource {
    /// Create a source for `url` with default configuration.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(url: impl Into<String>) -> Result<Self, FeedError> {
        Self::with_config(HttpFeedSourceConfig::new(url))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: HttpFeedSourceConfig) -> Result<Self, FeedError> {
        let url = Url::parse(&config.url).map_err(|source| FeedError::InvalidUrl {
            url: config.url.clone(),
            source,
        })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(FeedError::BuildClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FeedError::Runtime)?;
        Ok(Self {
            client,
            url,
            config,
            runtime,
        })
    }

    async fn fetch_async(&self) -> Result<MedalFeed, FeedError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err))?;
        let body = response
            .bytes()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?;
        parse_feed(&body, self.url.as_str())
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> FeedError {
        let url = self.url.to_string();
        if error.is_timeout() {
            return FeedError::Timeout {
                url,
                timeout_secs: self.config.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return FeedError::Http {
                url,
                status: status.as_u16(),
            };
        }
        FeedError::Network {
            url,
            message: error.to_string(),
        }
    }
}

impl FeedSource for HttpFeedSource {
    fn load(&self) -> Result<MedalFeed, FeedError> {
        let future = self.fetch_async();
        let feed = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // A current-thread runtime cannot be blocked without deadlocking it.
            Ok(_) => {
                return Err(FeedError::CurrentThreadRuntime {
                    url: self.url.to_string(),
                });
            }
            Err(_) => self.runtime.block_on(future),
        }?;
        log::debug!(
            "fetched {} countries from {}",
            feed.countries.len(),
            self.url
        );
        Ok(feed)
    }

    fn origin(&self) -> String {
        self.url.to_string()
    }
}
