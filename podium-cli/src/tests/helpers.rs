//! Test helpers for writing feed and population fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use podium_core::test_support::{feed_json, standing};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary directory holding a two-nation feed: `ONE` with a single gold,
/// `TWO` with three silver and three bronze.
#[derive(Debug)]
pub(super) struct FeedFixture {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl FeedFixture {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let feed = feed_json(&[standing(1, "ONE", [1, 0, 0]), standing(2, "TWO", [0, 3, 3])]);
        write_utf8(&root.join("medals.json"), feed.to_string().as_bytes());
        Self { _dir: dir, root }
    }

    pub(super) fn feed_path(&self) -> Utf8PathBuf {
        self.root.join("medals.json")
    }

    pub(super) fn write_population_table(&self, contents: &str) -> Utf8PathBuf {
        let path = self.root.join("population.json");
        write_utf8(&path, contents.as_bytes());
        path
    }
}
