//! Fixture: temporary log files for tests.

use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use super::LineSource;

pub(crate) fn log_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp log");
    file.write_all(contents.as_bytes()).expect("write temp log");
    file.flush().expect("flush temp log");
    file
}

pub(crate) fn source_for(file: &NamedTempFile) -> LineSource {
    LineSource::new(file.path())
}

pub(crate) fn missing_source() -> LineSource {
    let dir = tempfile::tempdir().expect("create temp dir");
    // The directory is dropped on return, so the path cannot exist.
    LineSource::new(dir.path().join("switch.log"))
}

/// A source pointing at a directory: opening succeeds, reading fails.
/// Keep the returned `TempDir` alive for as long as the source is used.
pub(crate) fn directory_source() -> (TempDir, LineSource) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let source = LineSource::new(dir.path());
    (dir, source)
}
