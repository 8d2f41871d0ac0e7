//! HTML table reading.
//!
//! One table is read per document, chosen by its `id` attribute. The first
//! `tr` of the table supplies the column names from its `th` cells; every
//! following `tr` is a data row made of its `td` cells in document order.

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html};
use tabmerge_model::{DEFAULT_HTML_TABLE_ID, ParsedSource, SourceKind};
use tracing::debug;

use super::text::cell_text;
use crate::adapter::SourceAdapter;
use crate::error::{IngestError, Result};
use crate::table::RecordBuilder;

/// Reads the table with a given `id` out of an HTML document.
#[derive(Debug, Clone)]
pub struct HtmlAdapter {
    table_id: String,
}

impl Default for HtmlAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_HTML_TABLE_ID)
    }
}

impl HtmlAdapter {
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
        }
    }

    /// Reads an already loaded document. `path` identifies the source in errors.
    pub fn read_str(&self, html: &str, path: &Path, id_column: &str) -> Result<ParsedSource> {
        let document = Html::parse_document(html);
        let table = elements_named(document.root_element(), "table")
            .find(|table| table.value().id() == Some(self.table_id.as_str()))
            .ok_or_else(|| IngestError::TableNotFound {
                path: path.to_path_buf(),
                table_id: self.table_id.clone(),
            })?;

        let mut rows = elements_named(table, "tr");
        let columns: Vec<String> = match rows.next() {
            Some(header) => elements_named(header, "th").map(cell_text).collect(),
            None => Vec::new(),
        };

        let mut builder = RecordBuilder::new(path, columns, id_column)?;
        for row in rows {
            builder.push_row(elements_named(row, "td").map(cell_text).collect())?;
        }

        let source = builder.finish(SourceKind::Html);
        debug!(
            path = %path.display(),
            table_id = %self.table_id,
            columns = source.columns.len(),
            rows = source.row_count,
            records = source.records.len(),
            "read html source"
        );
        Ok(source)
    }
}

impl SourceAdapter for HtmlAdapter {
    fn kind(&self) -> SourceKind {
        SourceKind::Html
    }

    fn read(&self, path: &Path, id_column: &str) -> Result<ParsedSource> {
        let html = fs::read_to_string(path).map_err(|e| IngestError::SourceUnreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.read_str(&html, path, id_column)
    }
}

/// Reads the table with `table_id` from the HTML file at `path`.
pub fn read_html_source(path: &Path, table_id: &str, id_column: &str) -> Result<ParsedSource> {
    HtmlAdapter::new(table_id).read(path, id_column)
}

/// Descendant elements of `scope` with the given tag name, in document order.
fn elements_named<'a>(
    scope: ElementRef<'a>,
    name: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == name)
}
