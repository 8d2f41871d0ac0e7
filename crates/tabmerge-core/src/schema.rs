//! Unified schema accumulation.

use std::collections::HashSet;

/// Ordered union of the column names seen across all sources.
///
/// Columns keep the position of their first appearance. The identifier column
/// is never part of the schema; it is rendered separately in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedSchema {
    id_column: String,
    columns: Vec<String>,
    seen: HashSet<String>,
}

impl UnifiedSchema {
    pub fn new(id_column: impl Into<String>) -> Self {
        Self {
            id_column: id_column.into(),
            columns: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Appends every column of `columns` not already present, skipping the
    /// identifier column. Returns how many columns were added.
    pub fn absorb<I, S>(&mut self, columns: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.columns.len();
        for column in columns {
            let column = column.as_ref();
            if column == self.id_column || self.seen.contains(column) {
                continue;
            }
            self.seen.insert(column.to_string());
            self.columns.push(column.to_string());
        }
        self.columns.len() - before
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn contains(&self, column: &str) -> bool {
        self.seen.contains(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
