//! Capability-based file access built on `cap-std` and `camino`.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path for reading using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}
