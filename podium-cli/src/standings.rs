//! Standings command implementation for the podium CLI.

use std::collections::HashMap;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use podium_core::{
    MedalFeed, PopulationLookup, RankingConfig, Standings, StaticPopulationTable, encode,
};
use podium_data::{FeedSource, FileFeedSource, HttpFeedSource, load_population_table};
use serde::{Deserialize, Serialize};

use crate::weights::WeightOverrides;
use crate::{
    ARG_BRONZE, ARG_FEED, ARG_FORMAT, ARG_GOLD, ARG_POPULATION, ARG_POPULATION_TABLE, ARG_QUERY,
    ARG_SILVER, CliError, ENV_FEED,
};

/// Output rendering for the `standings` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Aligned plain-text table followed by the share query.
    #[default]
    Table,
    /// Pretty-printed JSON report.
    Json,
}

/// CLI arguments for the `standings` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a medal feed from a file or URL, rank it with the \
                 configured medal weights, and print the standings. Weights \
                 come from explicit flags first, then a --query share \
                 string, then the defaults (gold 3, silver 2, bronze 1).",
    about = "Rank a medal feed"
)]
#[ortho_config(prefix = "PODIUM")]
pub(crate) struct StandingsArgs {
    /// Path or http(s) URL of the medal-table JSON feed.
    #[arg(value_name = "path|url")]
    #[serde(default)]
    pub(crate) feed: Option<String>,
    /// JSON object of country code to population overriding the built-in table.
    #[arg(long = ARG_POPULATION_TABLE, value_name = "path")]
    #[serde(default)]
    pub(crate) population_table: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
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
    /// Share query string to start from, e.g. "gold=5&population=true".
    #[arg(long = ARG_QUERY, value_name = "query")]
    #[serde(default)]
    pub(crate) query: Option<String>,
}

impl StandingsArgs {
    pub(crate) fn into_config(self) -> Result<StandingsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        StandingsConfig::try_from(merged)
    }
}

/// Where the feed is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FeedLocation {
    File(Utf8PathBuf),
    Url(String),
}

impl FeedLocation {
    fn parse(raw: String) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw)
        } else {
            Self::File(Utf8PathBuf::from(raw))
        }
    }
}

/// Resolved `standings` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StandingsConfig {
    pub(crate) feed: FeedLocation,
    pub(crate) population_table: Option<Utf8PathBuf>,
    pub(crate) format: OutputFormat,
    pub(crate) ranking: RankingConfig,
}

impl TryFrom<StandingsArgs> for StandingsConfig {
    type Error = CliError;

    fn try_from(args: StandingsArgs) -> Result<Self, Self::Error> {
        let ranking = WeightOverrides {
            gold: args.gold,
            silver: args.silver,
            bronze: args.bronze,
            population: args.population,
            query: args.query.as_deref(),
        }
        .resolve(&RankingConfig::default())?;
        let feed = args.feed.ok_or(CliError::MissingArgument {
            field: ARG_FEED,
            env: ENV_FEED,
        })?;
        Ok(Self {
            feed: FeedLocation::parse(feed),
            population_table: args.population_table,
            format: args.format.unwrap_or_default(),
            ranking,
        })
    }
}

/// Builds the feed source for the current standings invocation.
pub(crate) trait FeedSourceBuilder {
    fn build(&self, location: &FeedLocation) -> Result<Box<dyn FeedSource>, CliError>;
}

pub(crate) struct DefaultFeedSourceBuilder;

impl FeedSourceBuilder for DefaultFeedSourceBuilder {
    fn build(&self, location: &FeedLocation) -> Result<Box<dyn FeedSource>, CliError> {
        match location {
            FeedLocation::File(path) => Ok(Box::new(FileFeedSource::new(path.clone()))),
            FeedLocation::Url(url) => Ok(Box::new(HttpFeedSource::new(url.clone())?)),
        }
    }
}

/// Built-in populations with per-code overrides from a table file.
pub(crate) struct PopulationOverlay {
    pub(crate) overrides: HashMap<String, u64>,
}

impl PopulationLookup for PopulationOverlay {
    fn population(&self, short_code: &str) -> Option<u64> {
        self.overrides
            .population(short_code)
            .or_else(|| StaticPopulationTable.population(short_code))
    }
}

pub(crate) fn run_standings(args: StandingsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_standings_with(args, &DefaultFeedSourceBuilder, &mut stdout)
}

pub(crate) fn run_standings_with(
    args: StandingsArgs,
    builder: &dyn FeedSourceBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let feed = builder.build(&config.feed)?.load()?;
    let lookup = load_lookup(&config)?;
    let standings = Standings::build(&feed, &config.ranking, lookup.as_ref());
    let share = encode(&config.ranking, &RankingConfig::default()).to_query_string();
    log::debug!(
        "ranked {} countries with share query {share:?}",
        standings.len()
    );
    match config.format {
        OutputFormat::Table => write_table(writer, &feed, &standings, &share),
        OutputFormat::Json => write_json(writer, &feed, &standings, share),
    }
}

fn load_lookup(config: &StandingsConfig) -> Result<Box<dyn PopulationLookup>, CliError> {
    match &config.population_table {
        Some(path) => {
            let overrides = load_population_table(path)?;
            Ok(Box::new(PopulationOverlay { overrides }))
        }
        None => Ok(Box::new(StaticPopulationTable)),
    }
}

/// JSON document printed by `--format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StandingsReport<'a> {
    as_of: &'a str,
    share: String,
    #[serde(flatten)]
    standings: &'a Standings<'a>,
}

fn write_json(
    writer: &mut dyn Write,
    feed: &MedalFeed,
    standings: &Standings<'_>,
    share: String,
) -> Result<(), CliError> {
    let report = StandingsReport {
        as_of: &feed.info.as_of,
        share,
        standings,
    };
    let payload = serde_json::to_string_pretty(&report).map_err(CliError::SerializeStandings)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn write_table(
    writer: &mut dyn Write,
    feed: &MedalFeed,
    standings: &Standings<'_>,
    share: &str,
) -> Result<(), CliError> {
    render_table(writer, feed, standings, share).map_err(CliError::WriteOutput)
}

fn render_table(
    writer: &mut dyn Write,
    feed: &MedalFeed,
    standings: &Standings<'_>,
    share: &str,
) -> std::io::Result<()> {
    let info = &feed.info;
    writeln!(
        writer,
        "Standings as of {} ({} of {} events decided)",
        info.as_of, info.finished_events, info.total_events
    )?;
    let heading = if standings.config.normalize_by_population {
        "Per capita"
    } else {
        "Points"
    };
    writeln!(
        writer,
        "{:>3}  {:<4}  {:<28}  {:>3}  {:>3}  {:>3}  {heading}",
        "#", "Code", "Country", "G", "S", "B"
    )?;
    for row in &standings.rows {
        let country = row.country;
        writeln!(
            writer,
            "{:>3}  {:<4}  {:<28}  {:>3}  {:>3}  {:>3}  {}",
            row.position,
            country.short_code,
            country.name,
            country.gold,
            country.silver,
            country.bronze,
            row.summary
        )?;
    }
    writeln!(writer)?;
    write_share_line(writer, share)
}

/// Print the share query, or a marker when every setting is a default.
pub(crate) fn write_share_line(writer: &mut dyn Write, share: &str) -> std::io::Result<()> {
    if share.is_empty() {
        writeln!(writer, "share: (defaults)")
    } else {
        writeln!(writer, "share: ?{share}")
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<StandingsConfig, CliError> {
    let merged = StandingsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    StandingsConfig::try_from(merged)
}
