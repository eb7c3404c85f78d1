//! Ranked, display-ready standings.
//!
//! Combines the ranking engine with the display formatter so callers get one
//! row per country carrying its position, ranking key, integer points, and
//! the summary text appropriate to the active mode.

use serde::Serialize;

use crate::{
    CountryStanding, MedalFeed, PopulationLookup, RankingConfig, format_points,
    format_population_ratio, points, rank,
};

/// Marker shown when a per-capita figure cannot be computed.
pub const UNAVAILABLE: &str = "n/a";

/// One display row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow<'a> {
    /// One-based position in the ranked list.
    pub position: usize,
    /// The country this row describes.
    pub country: &'a CountryStanding,
    /// Ranking key; `None` when unavailable under normalisation.
    pub score: Option<f64>,
    /// Integer weighted medal total.
    pub points: u64,
    /// Compacted people-per-point figure, when computable.
    pub ratio: Option<String>,
    /// Text shown beside the medal counts.
    pub summary: String,
}

/// A fully ranked table for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings<'a> {
    /// Configuration the table was computed with.
    pub config: RankingConfig,
    /// Rows in ranked order.
    pub rows: Vec<StandingRow<'a>>,
}

impl<'a> Standings<'a> {
    /// Rank `feed` under `config` and render each row's display metrics.
    ///
    /// In points mode the summary reads `"N points"`. With population
    /// normalisation it reads `"1 per X"` people, or [`UNAVAILABLE`] when the
    /// population is unknown or zero, or the country has no weighted points.
    #[must_use]
    pub fn build(
        feed: &'a MedalFeed,
        config: &RankingConfig,
        lookup: &dyn PopulationLookup,
    ) -> Self {
        let rows = rank(&feed.countries, config, lookup)
            .into_iter()
            .enumerate()
            .map(|(index, ranked)| {
                let country = ranked.standing;
                let total = points(country, config);
                let ratio = format_population_ratio(lookup.population(&country.short_code), total);
                let summary = summarise(config, total, ratio.as_deref());
                StandingRow {
                    position: index + 1,
                    country,
                    score: ranked.score,
                    points: total,
                    ratio,
                    summary,
                }
            })
            .collect();
        Self {
            config: *config,
            rows,
        }
    }

    /// Number of ranked rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Report whether the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn summarise(config: &RankingConfig, total: u64, ratio: Option<&str>) -> String {
    if !config.normalize_by_population {
        return format_points(total);
    }
    ratio.map_or_else(|| UNAVAILABLE.to_owned(), |people| format!("1 per {people}"))
}
