//! Resolution of ranking weights from flags and share strings.

use podium_core::{Medal, QueryParams, RankingConfig, Weight, decode_strict};

use crate::CliError;

/// Ranking overrides collected from one command's merged arguments.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WeightOverrides<'a> {
    pub(crate) gold: Option<i64>,
    pub(crate) silver: Option<i64>,
    pub(crate) bronze: Option<i64>,
    pub(crate) population: Option<bool>,
    pub(crate) query: Option<&'a str>,
}

impl WeightOverrides<'_> {
    /// Resolve the effective configuration.
    ///
    /// Explicit flags win over the share query, which wins over `defaults`.
    pub(crate) fn resolve(&self, defaults: &RankingConfig) -> Result<RankingConfig, CliError> {
        let mut config = match self.query {
            Some(query) => decode_strict(&QueryParams::parse(query), defaults).map_err(|source| {
                CliError::InvalidQuery {
                    query: query.to_owned(),
                    source,
                }
            })?,
            None => *defaults,
        };
        for (medal, value) in [
            (Medal::Gold, self.gold),
            (Medal::Silver, self.silver),
            (Medal::Bronze, self.bronze),
        ] {
            if let Some(raw) = value {
                let weight = Weight::new(medal, raw).map_err(CliError::InvalidWeight)?;
                config.set_weight(medal, weight);
            }
        }
        if let Some(enabled) = self.population {
            config.normalize_by_population = enabled;
        }
        Ok(config)
    }
}
