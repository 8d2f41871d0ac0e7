//! Input classification by file extension.

use std::path::{Path, PathBuf};

use tabmerge_model::SourceKind;
use tracing::warn;

/// An input path with the adapter kind that will read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredSource {
    pub path: PathBuf,
    pub kind: SourceKind,
}

/// Input paths split by adapter kind.
#[derive(Debug, Clone, Default)]
pub struct SourcePartition {
    /// Recognized sources in the order they were given.
    pub sources: Vec<DiscoveredSource>,
    /// Paths whose extension no adapter handles.
    pub unrecognized: Vec<PathBuf>,
}

impl SourcePartition {
    /// Paths of one kind, in input order.
    pub fn paths_of(&self, kind: SourceKind) -> impl Iterator<Item = &Path> {
        self.sources
            .iter()
            .filter(move |source| source.kind == kind)
            .map(|source| source.path.as_path())
    }

    pub fn count(&self, kind: SourceKind) -> usize {
        self.paths_of(kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Classifies `paths` by extension.
///
/// The relative order of recognized sources is preserved because it decides
/// which source wins a column conflict during merging.
pub fn partition_sources<P: AsRef<Path>>(paths: &[P]) -> SourcePartition {
    let mut partition = SourcePartition::default();
    for path in paths {
        let path = path.as_ref();
        match SourceKind::from_path(path) {
            Some(kind) => partition.sources.push(DiscoveredSource {
                path: path.to_path_buf(),
                kind,
            }),
            None => {
                warn!(path = %path.display(), "skipping input with unsupported extension");
                partition.unrecognized.push(path.to_path_buf());
            }
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_preserves_input_order() {
        let partition = partition_sources(&[
            "data/second.csv",
            "data/first.HTML",
            "notes.txt",
            "data/third.Csv",
        ]);

        let ordered: Vec<&Path> = partition.sources.iter().map(|s| s.path.as_path()).collect();
        assert_eq!(
            ordered,
            vec![
                Path::new("data/second.csv"),
                Path::new("data/first.HTML"),
                Path::new("data/third.Csv"),
            ]
        );
        assert_eq!(partition.count(SourceKind::Csv), 2);
        assert_eq!(partition.count(SourceKind::Html), 1);
        assert_eq!(partition.unrecognized, vec![PathBuf::from("notes.txt")]);
    }

    #[test]
    fn test_partition_of_nothing_is_empty() {
        let partition = partition_sources::<PathBuf>(&[]);
        assert!(partition.is_empty());
        assert!(partition.unrecognized.is_empty());
    }
}
