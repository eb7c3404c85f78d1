//! Test utilities for feed sources.
//!
//! [`StubFeedSource`] is a deterministic [`FeedSource`] that serves a canned
//! response without touching the filesystem or network.

use podium_core::MedalFeed;
use serde_json::Value;

use crate::{FeedError, FeedSource, parse_feed};

const STUB_ORIGIN: &str = "stub://feed";

/// Stub `FeedSource` for testing.
///
/// # Example
///
/// ```
/// use podium_core::test_support::{feed_json, standing};
/// use podium_data::FeedSource;
/// use podium_data::test_support::StubFeedSource;
///
/// let source = StubFeedSource::with_json(feed_json(&[standing(1, "NOR", [1, 0, 0])]));
/// let feed = source.load().expect("stub feed is valid");
/// assert_eq!(feed.countries.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StubFeedSource {
    response: StubResponse,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Feed(MedalFeed),
    Json(Value),
    HttpStatus(u16),
}

impl StubFeedSource {
    /// Create a source that returns the given, already validated feed.
    #[must_use]
    pub const fn with_feed(feed: MedalFeed) -> Self {
        Self {
            response: StubResponse::Feed(feed),
        }
    }

    /// Create a source that validates `raw` on every load, as a real source
    /// would after receiving it.
    #[must_use]
    pub const fn with_json(raw: Value) -> Self {
        Self {
            response: StubResponse::Json(raw),
        }
    }

    /// Create a source that fails with [`FeedError::Http`] for `status`.
    #[must_use]
    pub const fn with_http_status(status: u16) -> Self {
        Self {
            response: StubResponse::HttpStatus(status),
        }
    }
}

impl FeedSource for StubFeedSource {
    fn load(&self) -> Result<MedalFeed, FeedError> {
        match &self.response {
            StubResponse::Feed(feed) => Ok(feed.clone()),
            StubResponse::Json(raw) => parse_feed(raw.to_string().as_bytes(), STUB_ORIGIN),
            StubResponse::HttpStatus(status) => Err(FeedError::Http {
                url: STUB_ORIGIN.to_owned(),
                status: *status,
            }),
        }
    }

    fn origin(&self) -> String {
        STUB_ORIGIN.to_owned()
    }
}
