use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = RenombraError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RenombraError {
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Filesystem failure. Always fatal for the run.
    #[error("failed to {operation} '{}'", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid extraction pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl RenombraError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
