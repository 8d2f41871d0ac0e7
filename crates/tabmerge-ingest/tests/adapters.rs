//! Integration tests for reading sources through the adapter registry.

use std::fs;
use std::path::{Path, PathBuf};

use tabmerge_ingest::{IngestError, SourceAdapter, SourceKind, SourceRegistry, partition_sources};
use tabmerge_model::ErrorKind;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

const DIRECTORY_HTML: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <table id="summary"><tr><th>Total</th></tr><tr><td>2</td></tr></table>
    <table id="directory">
      <tr><th>ID</th><th>Name</th><th>Phone</th></tr>
      <tr><td>1</td><td>Alice</td><td>555-0100</td></tr>
      <tr><td>2</td><td>Bob</td><td>555-0101</td></tr>
    </table>
  </body>
</html>
"#;

#[test]
fn csv_and_html_sources_yield_the_same_records() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write(
        dir.path(),
        "people.csv",
        "ID,Name,Phone\n1,Alice,555-0100\n2,Bob,555-0101\n",
    );
    let html = write(dir.path(), "people.HTML", DIRECTORY_HTML);

    let registry = SourceRegistry::default();
    let from_csv = registry.read(&csv, "ID").unwrap();
    let from_html = registry.read(&html, "ID").unwrap();

    assert_eq!(from_csv.kind, SourceKind::Csv);
    assert_eq!(from_html.kind, SourceKind::Html);
    assert_eq!(from_csv.columns, from_html.columns);
    assert_eq!(from_csv.records, from_html.records);
    assert_eq!(from_html.records.get("2").unwrap().get("Name"), Some("Bob"));
}

#[test]
fn registry_uses_configured_table_identifier() {
    let dir = tempfile::tempdir().unwrap();
    let html = write(dir.path(), "report.htm", DIRECTORY_HTML);

    let summary = SourceRegistry::new("summary").read(&html, "Total").unwrap();
    assert_eq!(summary.columns, vec!["Total"]);
    assert!(summary.records.contains("2"));

    let err = SourceRegistry::new("missing").read(&html, "ID").unwrap_err();
    assert!(matches!(err, IngestError::TableNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn unsupported_extension_is_rejected_by_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "notes.txt", "ID\n1\n");

    let err = SourceRegistry::default().read(&path, "ID").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceUnreadable);
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let registry = SourceRegistry::default();

    for name in ["absent.csv", "absent.html"] {
        let err = registry.read(&dir.path().join(name), "ID").unwrap_err();
        assert!(matches!(err, IngestError::SourceUnreadable { .. }), "{name}: {err}");
    }
}

#[test]
fn error_kinds_carry_source_path_and_row() {
    let dir = tempfile::tempdir().unwrap();
    let ragged = write(dir.path(), "ragged.csv", "ID,Name\n1,Alice\n2\n");
    let keyless = write(dir.path(), "keyless.csv", "Name\nAlice\n");
    let registry = SourceRegistry::default();

    let err = registry.read(&ragged, "ID").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedRow);
    assert!(err.to_string().contains("ragged.csv"));
    assert!(matches!(err, IngestError::MalformedRow { row: 2, .. }));

    let err = registry.read(&keyless, "ID").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn adapters_follow_partitioned_kinds() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "ID,X\n1,x\n");
    let b = write(dir.path(), "b.html", DIRECTORY_HTML);
    let c = write(dir.path(), "c.json", "{}");

    let partition = partition_sources(&[&a, &b, &c]);
    assert_eq!(partition.unrecognized, vec![c]);

    let registry = SourceRegistry::default();
    let kinds: Vec<SourceKind> = partition
        .sources
        .iter()
        .map(|source| {
            let adapter = registry.adapter(source.kind);
            adapter.read(&source.path, "ID").unwrap().kind
        })
        .collect();
    assert_eq!(kinds, vec![SourceKind::Csv, SourceKind::Html]);
}
