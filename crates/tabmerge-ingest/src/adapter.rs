//! The source adapter capability and per-kind adapter selection.

use std::path::Path;

use tabmerge_model::{ParsedSource, SourceKind};

use crate::csv::CsvAdapter;
use crate::error::{IngestError, Result};
use crate::html::HtmlAdapter;

/// Reads one source into its header columns and identifier-keyed records.
pub trait SourceAdapter {
    /// Format this adapter reads.
    fn kind(&self) -> SourceKind;

    /// Reads the source at `path`, keying records by `id_column`.
    ///
    /// Fails with [`IngestError::MissingIdColumn`] before any data row is read
    /// when the header lacks `id_column`.
    fn read(&self, path: &Path, id_column: &str) -> Result<ParsedSource>;
}

/// One adapter per [`SourceKind`], selected from the file extension.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    csv: CsvAdapter,
    html: HtmlAdapter,
}

impl SourceRegistry {
    /// Creates a registry whose HTML adapter reads the table with `html_table_id`.
    pub fn new(html_table_id: impl Into<String>) -> Self {
        Self {
            csv: CsvAdapter::default(),
            html: HtmlAdapter::new(html_table_id),
        }
    }

    pub fn adapter(&self, kind: SourceKind) -> &dyn SourceAdapter {
        match kind {
            SourceKind::Csv => &self.csv,
            SourceKind::Html => &self.html,
        }
    }

    /// Reads `path` with the adapter matching its extension.
    pub fn read(&self, path: &Path, id_column: &str) -> Result<ParsedSource> {
        let kind = SourceKind::from_path(path).ok_or_else(|| IngestError::UnsupportedSource {
            path: path.to_path_buf(),
        })?;
        self.adapter(kind).read(path, id_column)
    }
}
