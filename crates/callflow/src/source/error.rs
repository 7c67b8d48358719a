use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Log file unavailable: {}", path.display())]
    LogUnavailable { path: PathBuf },
    #[error("Failed reading log file {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Classify an error raised while opening the log.
    ///
    /// Only a missing file counts as unavailable; permission problems and
    /// the like are read failures.
    pub fn on_open(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            SourceError::LogUnavailable { path: path.to_path_buf() }
        } else {
            SourceError::ReadFailure { path: path.to_path_buf(), source: err }
        }
    }

    pub fn on_read(path: &Path, err: io::Error) -> Self {
        SourceError::ReadFailure { path: path.to_path_buf(), source: err }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, SourceError::LogUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_unavailable() {
        let err = SourceError::on_open(
            Path::new("/nope/switch.log"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_unavailable());
        assert_eq!(err.to_string(), "Log file unavailable: /nope/switch.log");
    }

    #[test]
    fn test_permission_denied_is_read_failure() {
        let err = SourceError::on_open(
            Path::new("/var/log/switch.log"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_unavailable());
        assert!(matches!(err, SourceError::ReadFailure { .. }));
        assert!(err.to_string().contains("denied"));
    }
}
