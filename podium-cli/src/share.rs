//! Share command: print the query string for a ranking configuration.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use podium_core::{RankingConfig, encode};
use serde::{Deserialize, Serialize};

use crate::weights::WeightOverrides;
use crate::{ARG_BRONZE, ARG_GOLD, ARG_POPULATION, ARG_QUERY, ARG_SILVER, CliError};

/// CLI arguments for the `share` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Encode a ranking configuration as the query string used in \
                 share links. Settings equal to the defaults are omitted, so \
                 the default configuration prints an empty line.",
    about = "Print a share query string"
)]
#[ortho_config(prefix = "PODIUM")]
pub(crate) struct ShareArgs {
    /// Points per gold medal (0-10).
    #[arg(long = ARG_GOLD, value_name = "points")]
    #[serde(default)]
    pub(crate) gold: Option<i64>,
    /// Points per silver medal (0-10).
    #[arg(long = ARG_SILVER, value_name = "points")]
    #[serde(default)]
    pub(crate) silver: Option<i64>,
    /// Points per bronze medal (0-10).
    #[arg(long = ARG_BRONZE, value_name = "points")]
    #[serde(default)]
    pub(crate) bronze: Option<i64>,
    /// Rank by people per weighted point instead of raw points.
    #[arg(
        long = ARG_POPULATION,
        value_name = "bool",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) population: Option<bool>,
    /// Existing share query string to adjust.
    #[arg(long = ARG_QUERY, value_name = "query")]
    #[serde(default)]
    pub(crate) query: Option<String>,
}

impl ShareArgs {
    pub(crate) fn into_ranking(self) -> Result<RankingConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        WeightOverrides {
            gold: merged.gold,
            silver: merged.silver,
            bronze: merged.bronze,
            population: merged.population,
            query: merged.query.as_deref(),
        }
        .resolve(&RankingConfig::default())
    }
}

pub(crate) fn run_share(args: ShareArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_share_with(args, &mut stdout)
}

pub(crate) fn run_share_with(args: ShareArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_ranking()?;
    let query = encode(&config, &RankingConfig::default()).to_query_string();
    writeln!(writer, "{query}").map_err(CliError::WriteOutput)
}
