//! Typed snapshots of the upstream medal-table feed.
//!
//! Values are produced by the validator in [`crate::schema`] and treated as
//! read-only by the ranking engine. Upstream totals and ranks are carried
//! through verbatim; nothing here recomputes them.

use serde::Serialize;

/// Feed-wide metadata describing the state of the competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedalFeedInfo {
    /// Timestamp the feed reports itself as current to. Opaque to the engine.
    pub as_of: String,
    /// Number of medal events on the programme.
    pub total_events: u32,
    /// Number of events already decided.
    pub finished_events: u32,
    /// Number of events still to be contested.
    pub scheduled_events: u32,
    /// Gold medals awarded across all nations.
    pub gold: u32,
    /// Silver medals awarded across all nations.
    pub silver: u32,
    /// Bronze medals awarded across all nations.
    pub bronze: u32,
    /// All medals awarded across all nations.
    pub total: u32,
    /// Upstream sport identifier for the aggregate table.
    pub sport_id: String,
    /// Human-readable sport name, when supplied.
    pub sport_name: Option<String>,
    /// Abbreviated sport name, when supplied.
    pub sport_short_name: Option<String>,
}

/// Medal counts and upstream ranks for one national entity.
///
/// `total` is taken from the feed as-is. It is expected to equal
/// `gold + silver + bronze` but the engine never enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStanding {
    /// Upstream country identifier.
    pub country_id: u64,
    /// Geographic identifier used to resolve flag artwork.
    pub geo_id: u64,
    /// Full country name.
    pub name: String,
    /// Short code joining the standing to population data.
    pub short_code: String,
    /// Gold medals won.
    pub gold: u32,
    /// Silver medals won.
    pub silver: u32,
    /// Bronze medals won.
    pub bronze: u32,
    /// Total medals won, as reported upstream.
    pub total: u32,
    /// Upstream rank by gold count.
    pub gold_rank: u32,
    /// Upstream sort position by gold count.
    pub gold_sort_rank: u32,
    /// Upstream rank by total count.
    pub total_rank: u32,
    /// Upstream sort position by total count.
    pub total_sort_rank: u32,
}

/// A complete, validated feed: metadata plus the per-country table in
/// upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalFeed {
    /// Feed-wide metadata.
    pub info: MedalFeedInfo,
    /// Per-country standings in the order the feed listed them.
    pub countries: Vec<CountryStanding>,
}

impl MedalFeed {
    /// Look up a country by its short code.
    ///
    /// # Examples
    /// ```
    /// use podium_core::validate_feed;
    ///
    /// let raw = serde_json::json!({
    ///     "info": {
    ///         "asOf": "2024-08-11T12:00:00Z",
    ///         "totalEvents": 329, "finishedEvents": 329, "scheduledEvents": 0,
    ///         "gold": 0, "silver": 0, "bronze": 0, "total": 0,
    ///         "sportId": "GLO", "sportName": null
    ///     },
    ///     "countries": []
    /// });
    /// let feed = validate_feed(&raw).expect("valid feed");
    /// assert!(feed.country("USA").is_none());
    /// ```
    #[must_use]
    pub fn country(&self, short_code: &str) -> Option<&CountryStanding> {
        self.countries
            .iter()
            .find(|standing| standing.short_code == short_code)
    }
}
