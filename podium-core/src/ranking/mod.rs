//! Weighted-score ranking of national medal standings.
//!
//! Each country's ranking key adds a tiny, strictly decreasing epsilon to
//! every non-zero weight so equal weighted totals are separated by gold, then
//! silver, then bronze. The user-visible points value is computed separately
//! from the integer weights and never drives ordering.

use std::cmp::Ordering;

use serde::Serialize;

use crate::{CountryStanding, Medal, PopulationLookup, RankingConfig, Weight};

/// Tie-break bias added to a non-zero gold weight.
pub const GOLD_EPSILON: f64 = 1e-5;
/// Tie-break bias added to a non-zero silver weight.
pub const SILVER_EPSILON: f64 = 1e-8;
/// Tie-break bias added to a non-zero bronze weight.
pub const BRONZE_EPSILON: f64 = 1e-11;

/// A country paired with its ranking key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedStanding<'a> {
    /// The ranked country.
    pub standing: &'a CountryStanding,
    /// Ranking key, or `None` when normalisation has no usable population.
    pub score: Option<f64>,
}

/// Integer weighted medal total shown to users.
///
/// # Examples
/// ```
/// use podium_core::{RankingConfig, points};
/// # use podium_core::CountryStanding;
/// # let standing = CountryStanding {
/// #     country_id: 1, geo_id: 1, name: "B".into(), short_code: "BBB".into(),
/// #     gold: 0, silver: 3, bronze: 3, total: 6,
/// #     gold_rank: 1, gold_sort_rank: 1, total_rank: 1, total_sort_rank: 1,
/// # };
/// assert_eq!(points(&standing, &RankingConfig::default()), 9);
/// ```
#[must_use]
pub fn points(standing: &CountryStanding, config: &RankingConfig) -> u64 {
    Medal::ALL
        .into_iter()
        .map(|medal| {
            u64::from(medal_count(standing, medal)) * u64::from(config.weight(medal).get())
        })
        .sum()
}

/// Ranking key for one country.
///
/// Returns `None` when population normalisation is enabled and the lookup
/// has no entry, or a zero entry, for the country's short code.
#[must_use]
pub fn score(
    standing: &CountryStanding,
    config: &RankingConfig,
    lookup: &dyn PopulationLookup,
) -> Option<f64> {
    let weighted = weighted_score(standing, config);
    if !config.normalize_by_population {
        return Some(weighted);
    }
    let Some(population) = lookup.population(&standing.short_code).filter(|p| *p > 0) else {
        log::debug!(
            "no usable population for {}; score unavailable",
            standing.short_code
        );
        return None;
    };
    Some(per_capita(weighted, population))
}

/// Order countries by descending score.
///
/// The result is a permutation of `countries`. Unavailable scores sort after
/// every available one; equal scores keep their input order.
#[must_use]
pub fn rank<'a>(
    countries: &'a [CountryStanding],
    config: &RankingConfig,
    lookup: &dyn PopulationLookup,
) -> Vec<RankedStanding<'a>> {
    let mut ranked: Vec<RankedStanding<'a>> = countries
        .iter()
        .map(|standing| RankedStanding {
            standing,
            score: score(standing, config, lookup),
        })
        .collect();
    ranked.sort_by(|left, right| compare_scores(left.score, right.score));
    log::debug!(
        "ranked {} countries (normalised: {})",
        ranked.len(),
        config.normalize_by_population
    );
    ranked
}

fn compare_scores(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "ranking keys blend integer weights with tie-break epsilons"
)]
fn weighted_score(standing: &CountryStanding, config: &RankingConfig) -> f64 {
    Medal::ALL
        .into_iter()
        .map(|medal| {
            f64::from(medal_count(standing, medal)) * biased_weight(config.weight(medal), medal)
        })
        .fold(0.0, |total, term| total + term)
}

#[expect(
    clippy::float_arithmetic,
    reason = "tie-break epsilons are added to the integer weight"
)]
fn biased_weight(weight: Weight, medal: Medal) -> f64 {
    if weight.is_zero() {
        return 0.0;
    }
    f64::from(weight.get()) + epsilon(medal)
}

const fn epsilon(medal: Medal) -> f64 {
    match medal {
        Medal::Gold => GOLD_EPSILON,
        Medal::Silver => SILVER_EPSILON,
        Medal::Bronze => BRONZE_EPSILON,
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "per-capita keys divide by populations far below 2^53"
)]
fn per_capita(weighted: f64, population: u64) -> f64 {
    weighted / population as f64
}

const fn medal_count(standing: &CountryStanding, medal: Medal) -> u32 {
    match medal {
        Medal::Gold => standing.gold,
        Medal::Silver => standing.silver,
        Medal::Bronze => standing.bronze,
    }
}
