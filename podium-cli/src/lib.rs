//! Command-line interface for ranking Olympic medal tables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod share;
mod standings;
mod weights;

pub use error::CliError;

use share::{ShareArgs, run_share};
use standings::{StandingsArgs, run_standings};

const ARG_FEED: &str = "feed";
const ARG_POPULATION_TABLE: &str = "population-table";
const ARG_FORMAT: &str = "format";
const ARG_GOLD: &str = "gold";
const ARG_SILVER: &str = "silver";
const ARG_BRONZE: &str = "bronze";
const ARG_POPULATION: &str = "population";
const ARG_QUERY: &str = "query";
const ENV_FEED: &str = "PODIUM_CMDS_STANDINGS_FEED";

/// Run the podium CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering, feed
/// loading, or writing to stdout fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Standings(args) => run_standings(args),
        Command::Share(args) => run_share(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "podium",
    about = "Rank Olympic medal tables with weighted and per-capita scoring",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a medal feed and print the standings.
    Standings(StandingsArgs),
    /// Print the share query string for a ranking configuration.
    Share(ShareArgs),
}

#[cfg(test)]
mod tests;
