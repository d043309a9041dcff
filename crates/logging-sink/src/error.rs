//! Errors raised while switching the sink to a log file.

use std::io;
use std::path::{Path, PathBuf};

/// Failure to prepare or open a log file target.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The log directory did not exist and could not be created.
    #[error("failed to create log directory '{}': {source}", .path.display())]
    CreateDirectory {
        /// Directory that was being created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The log file itself could not be created.
    #[error("failed to open log file '{}': {source}", .path.display())]
    OpenFile {
        /// Full path of the log file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    /// Returns the path the failed operation was working on.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDirectory { path, .. } | Self::OpenFile { path, .. } => path,
        }
    }

    /// Returns the operating system error behind the failure.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::CreateDirectory { source, .. } | Self::OpenFile { source, .. } => source,
        }
    }
}
