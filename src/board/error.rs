//! Error types for board document operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while loading a board document.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Failed to open or read the snapshot file.
    #[error("failed to read board snapshot: {path}")]
    FileRead {
        /// Path to the snapshot file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The snapshot file is not valid board JSON.
    #[error("failed to parse board snapshot: {path}")]
    ParseError {
        /// Path to the snapshot file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl BoardError {
    /// Creates a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ParseError {
            path: path.into(),
            source,
        }
    }
}
