//! Facade crate for the podium medal-standings engine.
//!
//! This crate re-exports the core ranking, formatting and codec API and
//! exposes the feed and population-table loaders behind the `sources`
//! feature.

#![forbid(unsafe_code)]

pub use podium_core::{
    ChangeHook, ConfigError, ConfigSession, CountryStanding, FeedSchema, FieldPath, Medal,
    MedalFeed, MedalFeedInfo, NoPopulation, POPULATION_PARAM, PopulationLookup, QueryParams,
    RankedStanding, RankingConfig, SchemaError, SchemaErrorKind, StandingRow, Standings,
    StaticPopulationTable, UNAVAILABLE, Weight, decode, decode_strict, encode, format_count,
    format_points, format_population_ratio, format_weight_label, points, rank, score,
    validate_feed,
};

#[cfg(feature = "sources")]
pub use podium_data::{
    DEFAULT_USER_AGENT, FeedError, FeedSource, FileFeedSource, HttpFeedSource,
    HttpFeedSourceConfig, PopulationTableError, load_population_table, parse_feed,
};
