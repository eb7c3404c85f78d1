//! Feed sources: where a medal table comes from before validation.

use std::io::{BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use podium_core::{MedalFeed, validate_feed};

use crate::FeedError;
use crate::fs::open_utf8_file;

/// Load a complete, validated medal feed.
///
/// Loading is a one-shot blocking step resolved before ranking begins.
/// Implementations never retry and never return partially valid feeds.
pub trait FeedSource: Send + Sync {
    /// Fetch and validate the feed.
    ///
    /// # Errors
    /// Returns [`FeedError`] when the feed cannot be read, is not JSON, or
    /// fails schema validation.
    fn load(&self) -> Result<MedalFeed, FeedError>;

    /// Describe where the feed comes from, for diagnostics.
    fn origin(&self) -> String;
}

/// Parse JSON bytes and validate them as a feed.
///
/// # Errors
/// Returns [`FeedError::Parse`] for malformed JSON and [`FeedError::Schema`]
/// for JSON of the wrong shape.
pub fn parse_feed(bytes: &[u8], origin: &str) -> Result<MedalFeed, FeedError> {
    let raw: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|source| FeedError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
    validate_feed(&raw).map_err(|source| FeedError::Schema {
        origin: origin.to_owned(),
        source,
    })
}

/// Reads a feed snapshot from a JSON file on disk.
///
/// # Examples
/// ```no_run
/// use podium_data::{FeedSource, FileFeedSource};
///
/// let source = FileFeedSource::new("artefacts/medals.json");
/// let feed = source.load()?;
/// println!("{} countries", feed.countries.len());
/// # Ok::<(), podium_data::FeedError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFeedSource {
    path: Utf8PathBuf,
}

impl FileFeedSource {
    /// Create a source for the given path.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Return the configured path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl FeedSource for FileFeedSource {
    fn load(&self) -> Result<MedalFeed, FeedError> {
        let file = open_utf8_file(&self.path).map_err(|source| FeedError::Open {
            path: self.path.clone(),
            source,
        })?;
        let mut bytes = Vec::new();
        BufReader::new(file)
            .read_to_end(&mut bytes)
            .map_err(|source| FeedError::Read {
                origin: self.origin(),
                source,
            })?;
        let feed = parse_feed(&bytes, self.path.as_str())?;
        log::debug!(
            "loaded {} countries from {}",
            feed.countries.len(),
            self.path
        );
        Ok(feed)
    }

    fn origin(&self) -> String {
        self.path.to_string()
    }
}
