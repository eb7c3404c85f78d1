//! Core standings computation for the Podium medal-table engine.
//!
//! The crate covers the whole pure pipeline between a fetched medal feed and
//! a rendered table:
//! - **Feed validation** ([`validate_feed`]) turns an untyped JSON payload
//!   into a [`MedalFeed`], rejecting it wholesale on the first malformed
//!   field.
//! - **Population lookup** ([`PopulationLookup`]) resolves a country short
//!   code to a population, treating absence as a normal outcome.
//! - **Ranking** ([`rank`]) orders countries by a weighted score with
//!   deterministic gold/silver/bronze tie-breaks, optionally per capita.
//! - **Display formatting** ([`format_count`] and friends) renders compact
//!   numbers, weight labels, and population ratios.
//! - **Configuration codec** ([`encode`], [`decode`]) maps a
//!   [`RankingConfig`] to and from its shareable query string.
//!
//! Everything here is synchronous and free of I/O.
//!
//! # Examples
//!
//! ```
//! use podium_core::{QueryParams, RankingConfig, StaticPopulationTable, Standings, decode, validate_feed};
//!
//! let raw = serde_json::json!({
//!     "info": {
//!         "asOf": "2024-08-11T18:00:00Z",
//!         "totalEvents": 329, "finishedEvents": 329, "scheduledEvents": 0,
//!         "gold": 1, "silver": 0, "bronze": 0, "total": 1,
//!         "sportId": "GLO", "sportName": null
//!     },
//!     "countries": [{
//!         "countryId": 1, "geoId": 578, "name": "Norway", "shortCode": "NOR",
//!         "gold": 1, "silver": 0, "bronze": 0, "total": 1,
//!         "goldRank": 1, "goldSortRank": 1, "totalRank": 1, "totalSortRank": 1
//!     }]
//! });
//! let feed = validate_feed(&raw)?;
//! let config = decode(&QueryParams::parse("gold=5"), &RankingConfig::default());
//! let standings = Standings::build(&feed, &config, &StaticPopulationTable);
//! assert_eq!(standings.rows[0].summary, "5 points");
//! # Ok::<(), podium_core::SchemaError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod codec;
mod config;
pub mod format;
mod model;
mod population;
pub mod ranking;
pub mod schema;
mod session;
mod standings;

#[doc(hidden)]
pub mod test_support;

pub use codec::{POPULATION_PARAM, QueryParams, decode, decode_strict, encode};
pub use config::{ConfigError, Medal, RankingConfig, Weight};
pub use format::{format_count, format_points, format_population_ratio, format_weight_label};
pub use model::{CountryStanding, MedalFeed, MedalFeedInfo};
pub use population::{NoPopulation, PopulationLookup, StaticPopulationTable};
pub use ranking::{RankedStanding, points, rank, score};
pub use schema::{FeedSchema, FieldPath, SchemaError, SchemaErrorKind, validate_feed};
pub use session::{ChangeHook, ConfigSession};
pub use standings::{StandingRow, Standings, UNAVAILABLE};
