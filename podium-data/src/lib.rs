//! Feed and population-table loading for the podium engine.
//!
//! Responsibilities:
//! - Define the [`FeedSource`] trait and its file and HTTP adapters.
//! - Turn raw JSON bytes into a validated [`podium_core::MedalFeed`].
//! - Load population overrides from disk.
//!
//! Boundaries:
//! - Do not encode ranking or formatting rules (live in `podium-core`).
//! - Loading is one-shot: no retries, no caching, no partial feeds.
//!
//! Invariants:
//! - Every successful load has passed schema validation.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod error;
mod fs;
mod http;
mod population;
mod source;
#[doc(hidden)]
pub mod test_support;

pub use error::{FeedError, PopulationTableError};
pub use http::{DEFAULT_USER_AGENT, HttpFeedSource, HttpFeedSourceConfig};
pub use population::load_population_table;
pub use source::{FeedSource, FileFeedSource, parse_feed};
