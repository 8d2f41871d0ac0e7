//! Turns a header and positional rows into identifier-keyed records.
//!
//! Both adapters feed rows through [`RecordBuilder`] so that column alignment,
//! identifier lookup and duplicate handling behave the same for every format.

use std::collections::btree_map::Entry;
use std::path::Path;

use tabmerge_model::{ParsedSource, Record, RecordStore, SourceKind};
use tracing::warn;

use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Strips a UTF-8 byte-order mark from the first header cell.
///
/// Whether a leading mark survives decoding depends on the adapter's parser,
/// so every header is normalized here before the identifier is looked up.
fn strip_bom(columns: &mut [String]) {
    if let Some(first) = columns.first_mut()
        && let Some(stripped) = first.strip_prefix(UTF8_BOM)
    {
        *first = stripped.to_string();
    }
}

/// Accumulates the rows of one source.
#[derive(Debug)]
pub(crate) struct RecordBuilder<'a> {
    path: &'a Path,
    id_column: &'a str,
    id_index: usize,
    columns: Vec<String>,
    records: RecordStore,
    row_count: usize,
    duplicate_ids: usize,
}

impl<'a> RecordBuilder<'a> {
    /// Validates the header before any data row is accepted.
    pub(crate) fn new(path: &'a Path, mut columns: Vec<String>, id_column: &'a str) -> Result<Self> {
        strip_bom(&mut columns);
        let id_index = columns
            .iter()
            .position(|column| column == id_column)
            .ok_or_else(|| IngestError::MissingIdColumn {
                path: path.to_path_buf(),
                column: id_column.to_string(),
            })?;
        Ok(Self {
            path,
            id_column,
            id_index,
            columns,
            records: RecordStore::new(),
            row_count: 0,
            duplicate_ids: 0,
        })
    }

    /// Adds one data row. Fields are matched to header columns by position.
    pub(crate) fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        self.row_count += 1;
        if row.len() != self.columns.len() {
            return Err(IngestError::MalformedRow {
                path: self.path.to_path_buf(),
                row: self.row_count,
                expected: self.columns.len(),
                found: row.len(),
            });
        }

        let mut id = None;
        let mut record = Record::new();
        for (idx, (column, value)) in self.columns.iter().zip(row).enumerate() {
            if idx == self.id_index {
                id = Some(value);
            } else if column != self.id_column {
                record.insert(column.as_str(), value);
            }
        }
        let Some(id) = id else {
            return Ok(());
        };

        match self.records.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                self.duplicate_ids += 1;
                warn!(
                    path = %self.path.display(),
                    row = self.row_count,
                    "identifier repeated within source; later row overrides shared columns"
                );
                let existing = slot.get_mut();
                for (column, value) in record {
                    existing.insert(column, value);
                }
            }
        }
        Ok(())
    }

    pub(crate) fn finish(self, kind: SourceKind) -> ParsedSource {
        ParsedSource {
            path: self.path.to_path_buf(),
            kind,
            columns: self.columns,
            records: self.records,
            row_count: self.row_count,
            duplicate_ids: self.duplicate_ids,
        }
    }
}
