//! Mapping between [`RankingConfig`] and its shareable query-string form.
//!
//! | Parameter    | Meaning                          | Emitted when          |
//! |--------------|----------------------------------|-----------------------|
//! | `gold`       | integer weight, `0..=10`         | differs from default  |
//! | `silver`     | integer weight, `0..=10`         | differs from default  |
//! | `bronze`     | integer weight, `0..=10`         | differs from default  |
//! | `population` | presence flag, value ignored     | normalisation enabled |
//!
//! For any config with in-range weights,
//! `decode(&encode(config, defaults), defaults) == config`.

use url::form_urlencoded;

use crate::{ConfigError, Medal, RankingConfig, Weight};

/// Name of the population-normalisation flag parameter.
pub const POPULATION_PARAM: &str = "population";

const POPULATION_FLAG_VALUE: &str = "true";

/// Ordered query parameters.
///
/// When a key repeats, lookups see its first occurrence.
///
/// # Examples
/// ```
/// use podium_core::QueryParams;
///
/// let params = QueryParams::parse("?gold=5&population");
/// assert_eq!(params.get("gold"), Some("5"));
/// assert!(params.contains("population"));
/// assert_eq!(params.to_query_string(), "gold=5&population=");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` string. A leading `?` is
    /// ignored.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let trimmed = query.strip_prefix('?').unwrap_or(query);
        form_urlencoded::parse(trimmed.as_bytes())
            .into_owned()
            .collect()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Return the first value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Report whether `key` is present, whatever its value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(name, _)| name == key)
    }

    /// Number of parameters, counting repeats.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Report whether no parameters are present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Render as an `application/x-www-form-urlencoded` string without a
    /// leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Serialise `config`, omitting every value that matches `defaults`.
///
/// # Examples
/// ```
/// use podium_core::{Medal, RankingConfig, Weight, encode};
///
/// let defaults = RankingConfig::default();
/// assert!(encode(&defaults, &defaults).is_empty());
///
/// let custom = defaults.with_weight(Medal::Gold, Weight::checked(5).expect("weight in range")).with_population(true);
/// assert_eq!(encode(&custom, &defaults).to_query_string(), "gold=5&population=true");
/// ```
#[must_use]
pub fn encode(config: &RankingConfig, defaults: &RankingConfig) -> QueryParams {
    let mut params = QueryParams::new();
    for medal in Medal::ALL {
        let weight = config.weight(medal);
        if weight != defaults.weight(medal) {
            params.push(medal.as_str(), weight.to_string());
        }
    }
    if config.normalize_by_population {
        params.push(POPULATION_PARAM, POPULATION_FLAG_VALUE);
    }
    params
}

/// Rebuild a config from query parameters, failing closed.
///
/// Absent weights take their default. A weight that is not an integer, or
/// lies outside `0..=10`, is discarded with a warning and also takes its
/// default. Normalisation is enabled whenever `population` is present.
#[must_use]
pub fn decode(params: &QueryParams, defaults: &RankingConfig) -> RankingConfig {
    let mut config = *defaults;
    for medal in Medal::ALL {
        match decode_weight(params, medal) {
            Ok(Some(weight)) => config.set_weight(medal, weight),
            Ok(None) => {}
            Err(err) => {
                log::warn!("discarding query parameter: {err}; using default");
            }
        }
    }
    config.normalize_by_population = params.contains(POPULATION_PARAM);
    config
}

/// Rebuild a config from query parameters, rejecting malformed weights.
///
/// # Errors
/// Returns [`ConfigError::ConfigParseError`] for a non-integer weight and
/// [`ConfigError::WeightOutOfRange`] for an integer outside `0..=10`.
pub fn decode_strict(
    params: &QueryParams,
    defaults: &RankingConfig,
) -> Result<RankingConfig, ConfigError> {
    let mut config = *defaults;
    for medal in Medal::ALL {
        if let Some(weight) = decode_weight(params, medal)? {
            config.set_weight(medal, weight);
        }
    }
    config.normalize_by_population = params.contains(POPULATION_PARAM);
    Ok(config)
}

fn decode_weight(params: &QueryParams, medal: Medal) -> Result<Option<Weight>, ConfigError> {
    let Some(raw) = params.get(medal.as_str()) else {
        return Ok(None);
    };
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::ConfigParseError {
            parameter: medal.as_str(),
            raw: raw.to_owned(),
        })?;
    Weight::new(medal, value).map(Some)
}
