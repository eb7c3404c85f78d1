//! Error types raised while loading feeds and population tables.

use camino::Utf8PathBuf;
use podium_core::SchemaError;
use thiserror::Error;

/// Errors raised while loading a medal feed.
///
/// Every variant is a hard failure of the load step: no partially valid
/// feed is ever returned.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Opening the feed file failed.
    #[error("failed to open feed file at {path}")]
    Open {
        /// Requested feed path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading the feed body failed.
    #[error("failed to read feed from {origin}")]
    Read {
        /// File path or URL the feed came from.
        origin: String,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The feed body was not valid JSON.
    #[error("feed from {origin} is not valid JSON")]
    Parse {
        /// File path or URL the feed came from.
        origin: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The feed JSON did not match the expected schema.
    #[error("feed from {origin} failed validation")]
    Schema {
        /// File path or URL the feed came from.
        origin: String,
        /// First offending field.
        #[source]
        source: SchemaError,
    },
    /// The configured URL could not be parsed.
    #[error("invalid feed URL {url:?}")]
    InvalidUrl {
        /// Rejected URL text.
        url: String,
        /// Source error from `url`.
        #[source]
        source: url::ParseError,
    },
    /// The server answered with a non-success status.
    #[error("feed request to {url} failed with HTTP {status}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The request timed out.
    #[error("feed request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The request failed before a response arrived.
    #[error("feed request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Description from the HTTP client.
        message: String,
    },
    /// Building the HTTP client failed.
    #[error("failed to build HTTP client")]
    BuildClient(#[source] reqwest::Error),
    /// Building the Tokio runtime failed.
    #[error("failed to build Tokio runtime")]
    Runtime(#[source] std::io::Error),
    /// A blocking load was attempted from inside a current-thread runtime.
    #[error("cannot block on {url} from inside a current-thread Tokio runtime")]
    CurrentThreadRuntime {
        /// Requested URL.
        url: String,
    },
}

/// Errors raised while loading a population table file.
#[derive(Debug, Error)]
pub enum PopulationTableError {
    /// Opening the table file failed.
    #[error("failed to open population table at {path}")]
    Open {
        /// Requested table path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The table was not a JSON object of non-negative integers.
    #[error("failed to parse population table at {path}")]
    Parse {
        /// Requested table path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}
