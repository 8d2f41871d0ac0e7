//! CSV source reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord};
use tabmerge_model::{ParsedSource, SourceKind};
use tracing::debug;

use crate::adapter::SourceAdapter;
use crate::error::{IngestError, Result};
use crate::table::RecordBuilder;

/// Reads comma-separated files with quoted-field support.
///
/// The first line is the header. Rows are accepted with any width by the
/// underlying parser and then checked against the header width, so a short or
/// long row is reported as [`IngestError::MalformedRow`] with its row index.
#[derive(Debug, Clone, Copy)]
pub struct CsvAdapter {
    delimiter: u8,
}

impl Default for CsvAdapter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reads CSV data from any reader. `path` identifies the source in errors.
    pub fn read_from<R: Read>(&self, input: R, path: &Path, id_column: &str) -> Result<ParsedSource> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        let mut records = reader.records();

        let columns: Vec<String> = match records.next() {
            Some(header) => to_fields(&header.map_err(|e| csv_error(path, e))?),
            None => Vec::new(),
        };

        let mut builder = RecordBuilder::new(path, columns, id_column)?;
        for record in records {
            let record = record.map_err(|e| csv_error(path, e))?;
            builder.push_row(to_fields(&record))?;
        }

        let source = builder.finish(SourceKind::Csv);
        debug!(
            path = %path.display(),
            columns = source.columns.len(),
            rows = source.row_count,
            records = source.records.len(),
            "read csv source"
        );
        Ok(source)
    }
}

impl SourceAdapter for CsvAdapter {
    fn kind(&self) -> SourceKind {
        SourceKind::Csv
    }

    fn read(&self, path: &Path, id_column: &str) -> Result<ParsedSource> {
        let file = File::open(path).map_err(|e| IngestError::SourceUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.read_from(file, path, id_column)
    }
}

/// Reads a comma-separated file keyed by `id_column`.
pub fn read_csv_source(path: &Path, id_column: &str) -> Result<ParsedSource> {
    CsvAdapter::default().read(path, id_column)
}

fn to_fields(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

fn csv_error(path: &Path, error: ::csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        ::csv::ErrorKind::Io(source) => IngestError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::Parse {
            path: path.to_path_buf(),
            message,
        },
    }
}
