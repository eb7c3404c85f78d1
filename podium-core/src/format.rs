//! User-facing text for counts, weights, and population ratios.

use crate::Weight;

/// Magnitude tiers, largest first.
const TIERS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Compact a count for display.
///
/// Values below one thousand render as rounded integers; larger values are
/// divided by the tier's magnitude, rounded half away from zero, and
/// suffixed with `K`, `M`, or `B`. Rounding never promotes a value into the
/// next tier, so `999_999` renders as `1000K`.
///
/// # Examples
/// ```
/// use podium_core::format_count;
///
/// assert_eq!(format_count(999.0), "999");
/// assert_eq!(format_count(1_500.0), "2K");
/// assert_eq!(format_count(3_400_000.0), "3M");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "compaction scales the value into its display tier"
)]
pub fn format_count(value: f64) -> String {
    let magnitude = value.abs();
    TIERS
        .iter()
        .find(|(threshold, _)| magnitude >= *threshold)
        .map_or_else(
            || whole(value).to_string(),
            |(threshold, suffix)| format!("{}{suffix}", whole(value / threshold)),
        )
}

/// Label describing what a weight contributes.
///
/// # Examples
/// ```
/// use podium_core::{Weight, format_weight_label};
///
/// assert_eq!(format_weight_label(Weight::checked(0).expect("weight in range")), "Tiebreaker");
/// assert_eq!(format_weight_label(Weight::checked(1).expect("weight in range")), "1 point");
/// assert_eq!(format_weight_label(Weight::checked(5).expect("weight in range")), "5 points");
/// ```
#[must_use]
pub fn format_weight_label(weight: Weight) -> String {
    if weight.is_zero() {
        return "Tiebreaker".to_owned();
    }
    pluralise_points(u64::from(weight.get()), &weight.to_string())
}

/// Text for a country's weighted points total, compacted when large.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "points totals are far below 2^53"
)]
pub fn format_points(points: u64) -> String {
    pluralise_points(points, &format_count(points as f64))
}

/// People per weighted point, compacted for display.
///
/// Returns `None` when the population is unknown or zero, or the weighted
/// total is zero, rather than an infinite or undefined ratio.
///
/// # Examples
/// ```
/// use podium_core::format_population_ratio;
///
/// assert_eq!(format_population_ratio(Some(5_500_000), 11), Some("500K".to_owned()));
/// assert_eq!(format_population_ratio(Some(5_500_000), 0), None);
/// assert_eq!(format_population_ratio(None, 11), None);
/// assert_eq!(format_population_ratio(Some(0), 11), None);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "ratios divide populations by small weighted totals"
)]
pub fn format_population_ratio(population: Option<u64>, weighted_total: u64) -> Option<String> {
    let people = population.filter(|people| *people > 0)?;
    if weighted_total == 0 {
        return None;
    }
    Some(format_count(people as f64 / weighted_total as f64))
}

fn pluralise_points(amount: u64, rendered: &str) -> String {
    if amount == 1 {
        format!("{rendered} point")
    } else {
        format!("{rendered} points")
    }
}

/// Round half away from zero, normalising negative zero.
#[expect(
    clippy::float_arithmetic,
    reason = "adding zero clears the sign of a negative zero"
)]
fn whole(value: f64) -> f64 {
    value.round() + 0.0
}
