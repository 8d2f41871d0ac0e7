//! Error types for source ingestion.

use std::path::PathBuf;

use tabmerge_model::ErrorKind;
use thiserror::Error;

/// Errors that can occur while reading a source.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source Access Errors ===
    /// Source could not be opened or read.
    #[error("failed to read source {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source was read but could not be decoded.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// No adapter handles the file extension.
    #[error("unsupported source type: {path}")]
    UnsupportedSource { path: PathBuf },

    // === Schema Errors ===
    /// Identifier column absent from the header.
    #[error("identifier column '{column}' not found in header of {path}")]
    MissingIdColumn { path: PathBuf, column: String },

    /// HTML document has no table with the requested id.
    #[error("no table with id '{table_id}' in {path}")]
    TableNotFound { path: PathBuf, table_id: String },

    // === Row Errors ===
    /// Data row width differs from the header width.
    #[error("malformed row {row} in {path}: expected {expected} fields, found {found}")]
    MalformedRow {
        path: PathBuf,
        /// 1-based data row index, header excluded.
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceUnreadable { .. } | Self::Parse { .. } | Self::UnsupportedSource { .. } => {
                ErrorKind::SourceUnreadable
            }
            Self::MissingIdColumn { .. } | Self::TableNotFound { .. } => ErrorKind::Schema,
            Self::MalformedRow { .. } => ErrorKind::MalformedRow,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
