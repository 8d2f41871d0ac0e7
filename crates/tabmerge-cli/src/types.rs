use std::path::PathBuf;

use tabmerge_core::MergeStats;
use tabmerge_model::SourceKind;

#[derive(Debug)]
pub struct RunResult {
    /// Destination of the combined file.
    pub output_path: PathBuf,
    /// False for dry runs.
    pub written: bool,
    pub sources: Vec<SourceSummary>,
    /// Inputs skipped because no adapter handles their extension.
    pub skipped: Vec<PathBuf>,
    /// Unified schema width, identifier excluded.
    pub columns: usize,
    /// Distinct identifiers in the combined output.
    pub records: usize,
}

impl RunResult {
    pub fn totals(&self) -> MergeStats {
        let mut total = MergeStats::default();
        for source in &self.sources {
            total += source.stats;
        }
        total
    }

    pub fn total_rows(&self) -> usize {
        self.sources.iter().map(|source| source.rows).sum()
    }
}

#[derive(Debug)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub kind: SourceKind,
    /// Data rows read.
    pub rows: usize,
    /// Header width, identifier included.
    pub columns: usize,
    /// Columns first seen in this source.
    pub new_columns: usize,
    pub duplicate_ids: usize,
    pub stats: MergeStats,
}

impl SourceSummary {
    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |name| {
                name.to_string_lossy().into_owned()
            })
    }
}
