//! Error types emitted by the podium CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use podium_core::ConfigError;
use podium_data::{FeedError, PopulationTableError};
use thiserror::Error;

/// Errors emitted by the podium CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it as an argument or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A weight flag fell outside the accepted range.
    #[error("invalid weight flag: {0}")]
    InvalidWeight(#[source] ConfigError),
    /// The `--query` share string carried a malformed parameter.
    #[error("invalid share query {query:?}: {source}")]
    InvalidQuery {
        query: String,
        #[source]
        source: ConfigError,
    },
    /// Loading the medal feed failed.
    #[error("failed to load medal feed: {0}")]
    Feed(#[from] FeedError),
    /// Loading the population override table failed.
    #[error(transparent)]
    PopulationTable(#[from] PopulationTableError),
    /// Serializing the standings report failed.
    #[error("failed to serialize standings: {0}")]
    SerializeStandings(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
