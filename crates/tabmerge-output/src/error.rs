//! Error types for output writing.

use std::path::PathBuf;

use tabmerge_model::ErrorKind;
use thiserror::Error;

/// Errors that can occur while writing the combined file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Parent directory of the output could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be encoded or written.
    #[error("failed to write row {row} to {path}: {source}")]
    Write {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// Buffered data could not be flushed to disk.
    #[error("failed to flush {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished temporary file could not be moved into place.
    #[error("failed to move {from} to {path}: {source}")]
    Persist {
        from: PathBuf,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::SinkWrite
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
