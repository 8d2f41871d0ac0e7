//! Deterministic rendering of a record store against a schema.

use tabmerge_model::{DEFAULT_ID_COLUMN, DEFAULT_PLACEHOLDER, RecordStore};

/// A rendered table: header plus one row per identifier.
///
/// Every row, header included, has the same width: the identifier followed by
/// one field per schema column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RenderedTable {
    /// Fields per row.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header followed by data rows.
    pub fn all_rows(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }
}

/// Lays records out in identifier order against a column list.
#[derive(Debug, Clone)]
pub struct Renderer {
    id_column: String,
    placeholder: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_ID_COLUMN, DEFAULT_PLACEHOLDER)
    }
}

impl Renderer {
    pub fn new(id_column: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            id_column: id_column.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Renders `records` against `schema`.
    ///
    /// The header is the identifier column followed by `schema`. Rows are
    /// ordered by ascending byte order of the identifier, whatever order the
    /// records were merged in. A column a record lacks renders as the
    /// placeholder.
    pub fn render<S: AsRef<str>>(&self, records: &RecordStore, schema: &[S]) -> RenderedTable {
        let mut header = Vec::with_capacity(schema.len() + 1);
        header.push(self.id_column.clone());
        header.extend(schema.iter().map(|column| column.as_ref().to_string()));

        // RecordStore iterates identifiers in ascending byte order.
        let rows = records
            .iter()
            .map(|(id, record)| {
                let mut row = Vec::with_capacity(header.len());
                row.push(id.to_string());
                row.extend(schema.iter().map(|column| {
                    record
                        .get(column.as_ref())
                        .unwrap_or(self.placeholder.as_str())
                        .to_string()
                }));
                row
            })
            .collect();

        RenderedTable { header, rows }
    }
}
