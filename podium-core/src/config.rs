//! User-controlled ranking configuration.
//!
//! Weights are held as validated integers in `0..=10`; string forms exist
//! only at the query-string boundary in [`crate::codec`].

use serde::Serialize;
use thiserror::Error;

/// Medal colours that carry a weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    /// First place.
    Gold,
    /// Second place.
    Silver,
    /// Third place.
    Bronze,
}

impl Medal {
    /// All medals in descending order of precedence.
    pub const ALL: [Self; 3] = [Self::Gold, Self::Silver, Self::Bronze];

    /// Return the medal as a lowercase `&str`, matching its query parameter.
    ///
    /// # Examples
    /// ```
    /// use podium_core::Medal;
    ///
    /// assert_eq!(Medal::Silver.as_str(), "silver");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
        }
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while building or decoding a [`RankingConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A weight fell outside the supported range.
    #[error("{medal} weight {value} is outside {min}..={max}", min = Weight::MIN, max = Weight::MAX)]
    WeightOutOfRange {
        /// Medal the weight applies to.
        medal: Medal,
        /// Rejected value.
        value: i64,
    },
    /// A weight query parameter was not an integer.
    #[error("query parameter `{parameter}` has non-numeric value {raw:?}")]
    ConfigParseError {
        /// Parameter name.
        parameter: &'static str,
        /// Raw value found in the query string.
        raw: String,
    },
}

/// Integer importance assigned to a medal colour, in `0..=10`.
///
/// # Examples
/// ```
/// use podium_core::{Medal, Weight};
///
/// let weight = Weight::new(Medal::Gold, 5).expect("in range");
/// assert_eq!(weight.get(), 5);
/// assert!(Weight::new(Medal::Gold, 11).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Weight(u8);

impl Weight {
    /// Smallest accepted weight.
    pub const MIN: u8 = 0;
    /// Largest accepted weight.
    pub const MAX: u8 = 10;

    /// Validate a weight for `medal`.
    ///
    /// # Errors
    /// Returns [`ConfigError::WeightOutOfRange`] when `value` exceeds
    /// [`Weight::MAX`] or is negative.
    pub fn new(medal: Medal, value: i64) -> Result<Self, ConfigError> {
        u8::try_from(value)
            .ok()
            .filter(|candidate| *candidate <= Self::MAX)
            .map(Self)
            .ok_or(ConfigError::WeightOutOfRange { medal, value })
    }

    /// Build a weight from an unsigned value, or `None` above
    /// [`Weight::MAX`].
    #[must_use]
    pub const fn checked(value: u8) -> Option<Self> {
        if value > Self::MAX {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Return the raw weight.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Report whether the weight zeroes its medal's contribution.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weights plus the population-normalisation switch.
///
/// The engine borrows a config per computation and never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingConfig {
    /// Weight applied to each gold medal.
    pub gold_weight: Weight,
    /// Weight applied to each silver medal.
    pub silver_weight: Weight,
    /// Weight applied to each bronze medal.
    pub bronze_weight: Weight,
    /// Divide weighted totals by national population.
    pub normalize_by_population: bool,
}

impl RankingConfig {
    /// Return the weight configured for `medal`.
    #[must_use]
    pub const fn weight(&self, medal: Medal) -> Weight {
        match medal {
            Medal::Gold => self.gold_weight,
            Medal::Silver => self.silver_weight,
            Medal::Bronze => self.bronze_weight,
        }
    }

    /// Replace the weight for `medal`.
    pub const fn set_weight(&mut self, medal: Medal, weight: Weight) {
        match medal {
            Medal::Gold => self.gold_weight = weight,
            Medal::Silver => self.silver_weight = weight,
            Medal::Bronze => self.bronze_weight = weight,
        }
    }

    /// Replace the weight for `medal` while returning `self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use podium_core::{Medal, RankingConfig, Weight};
    ///
    /// let config = RankingConfig::default()
    ///     .with_weight(Medal::Gold, Weight::checked(5).expect("weight in range"))
    ///     .with_population(true);
    /// assert_eq!(config.gold_weight.get(), 5);
    /// assert!(config.normalize_by_population);
    /// ```
    #[must_use]
    pub const fn with_weight(mut self, medal: Medal, weight: Weight) -> Self {
        self.set_weight(medal, weight);
        self
    }

    /// Toggle population normalisation while returning `self` for chaining.
    #[must_use]
    pub const fn with_population(mut self, enabled: bool) -> Self {
        self.normalize_by_population = enabled;
        self
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            gold_weight: Weight(3),
            silver_weight: Weight(2),
            bronze_weight: Weight(1),
            normalize_by_population: false,
        }
    }
}
