//! Parsed source tables.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::record::RecordStore;

/// Source format, selected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Comma-separated text.
    Csv,
    /// A table embedded in an HTML document.
    Html,
}

impl SourceKind {
    /// Classifies a path by its extension (case-insensitive).
    ///
    /// `.csv` is read as delimited text; `.html` and `.htm` as HTML.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") {
            Some(Self::Html)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One source after it has been read by an adapter.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    /// Where the source was read from.
    pub path: PathBuf,
    pub kind: SourceKind,
    /// Header columns in source order, identifier column included.
    pub columns: Vec<String>,
    /// One record per distinct identifier, identifier column excluded.
    pub records: RecordStore,
    /// Number of data rows read (header excluded).
    pub row_count: usize,
    /// Rows whose identifier repeated an earlier row of the same source.
    pub duplicate_ids: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension_is_case_insensitive() {
        assert_eq!(SourceKind::from_path(Path::new("a.csv")), Some(SourceKind::Csv));
        assert_eq!(SourceKind::from_path(Path::new("A.CSV")), Some(SourceKind::Csv));
        assert_eq!(SourceKind::from_path(Path::new("dir/first.Html")), Some(SourceKind::Html));
        assert_eq!(SourceKind::from_path(Path::new("page.htm")), Some(SourceKind::Html));
    }

    #[test]
    fn kind_rejects_unknown_or_missing_extension() {
        assert_eq!(SourceKind::from_path(Path::new("notes.txt")), None);
        assert_eq!(SourceKind::from_path(Path::new("csv")), None);
        assert_eq!(SourceKind::from_path(Path::new("archive.csv.gz")), None);
    }
}
