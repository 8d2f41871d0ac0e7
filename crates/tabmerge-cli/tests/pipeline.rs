//! End-to-end tests for the merge pipeline.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tabmerge_cli::pipeline::run;
use tabmerge_ingest::IngestError;
use tabmerge_model::{ErrorKind, MergeOptions, MergePolicy, QuoteStyle};
use tabmerge_output::{OutputError, temp_path_for};
use tracing_subscriber::fmt::MakeWriter;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn options_in(dir: &Path) -> MergeOptions {
    MergeOptions::default().with_output_path(dir.join("combined.csv"))
}

/// In-memory log sink for a scoped subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Dry-runs the pipeline and returns what it logged at info and above.
fn dry_run_logs(inputs: &[PathBuf], options: &MergeOptions) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, || run(inputs, options, true)).unwrap();
    logs.contents()
}

#[test]
fn merges_documented_example() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "ID,Name\n1,Alice\n2,Bob\n");
    let b = write(dir.path(), "b.csv", "ID,Age\n2,30\n3,25\n");
    let options = options_in(dir.path());

    let result = run(&[a, b], &options, false).unwrap();

    assert!(result.written);
    assert_eq!(result.records, 3);
    assert_eq!(result.columns, 2);
    let output = fs::read_to_string(&options.output_path).unwrap();
    insta::assert_snapshot!(output, @r"
    ID,Name,Age
    1,Alice,
    2,Bob,30
    3,,25
    ");
}

#[test]
fn mixes_html_and_csv_sources_in_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let html = write(
        dir.path(),
        "directory.html",
        r#"<html><body><table id="directory">
            <tr><th>ID</th><th>Name</th><th>Email</th></tr>
            <tr><td>7</td><td> Grace   Hopper </td><td>grace@example.com</td></tr>
            <tr><td>10</td><td>Alan Turing</td><td>alan@example.com</td></tr>
        </table></body></html>"#,
    );
    let csv = write(dir.path(), "phones.csv", "Phone,ID,Name\n555-0107,7,G. Hopper\n");
    let options = options_in(dir.path()).with_placeholder("N/A");

    let result = run(&[html, csv], &options, false).unwrap();

    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.sources[1].stats.updated, 1);
    assert_eq!(result.sources[1].stats.overwritten, 1);
    let output = fs::read_to_string(&options.output_path).unwrap();
    insta::assert_snapshot!(output, @r"
    ID,Name,Email,Phone
    10,Alan Turing,alan@example.com,N/A
    7,G. Hopper,grace@example.com,555-0107
    ");
}

#[test]
fn later_source_wins_conflicting_column() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "ID,X\n1,foo\n");
    let b = write(dir.path(), "b.csv", "ID,X\n1,bar\n");
    let options = options_in(dir.path());

    run(&[a.clone(), b.clone()], &options, false).unwrap();
    assert_eq!(fs::read_to_string(&options.output_path).unwrap(), "ID,X\n1,bar\n");

    run(&[b, a], &options, false).unwrap();
    assert_eq!(fs::read_to_string(&options.output_path).unwrap(), "ID,X\n1,foo\n");
}

#[test]
fn replace_policy_and_always_quoting() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "ID,Name\n1,Alice\n");
    let b = write(dir.path(), "b.csv", "ID,Age\n1,30\n");
    let options = options_in(dir.path())
        .with_merge_policy(MergePolicy::Replace)
        .with_quote_style(QuoteStyle::Always);

    run(&[a, b], &options, false).unwrap();
    assert_eq!(
        fs::read_to_string(&options.output_path).unwrap(),
        "\"ID\",\"Name\",\"Age\"\n\"1\",\"\",\"30\"\n"
    );
}

#[test]
fn custom_identifier_column() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "Key,ID\nk1,not-an-id\n");
    let options = options_in(dir.path()).with_id_column("Key");

    run(&[a], &options, false).unwrap();
    assert_eq!(
        fs::read_to_string(&options.output_path).unwrap(),
        "Key,ID\nk1,not-an-id\n"
    );
}

#[test]
fn unrecognized_inputs_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "ID,X\n1,x\n");
    let notes = write(dir.path(), "notes.txt", "not a table");
    let options = options_in(dir.path());

    let result = run(&[a, notes.clone()], &options, false).unwrap();
    assert_eq!(result.skipped, vec![notes]);
    assert_eq!(result.sources.len(), 1);
}

#[test]
fn no_recognized_inputs_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let notes = write(dir.path(), "notes.txt", "");
    let options = options_in(dir.path());

    let result = run(&[notes], &options, false).unwrap();
    assert_eq!(result.records, 0);
    assert_eq!(fs::read_to_string(&options.output_path).unwrap(), "ID\n");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "ID,X\n1,x\n");
    let options = options_in(dir.path());

    let result = run(&[a], &options, true).unwrap();
    assert!(!result.written);
    assert_eq!(result.records, 1);
    assert!(!options.output_path.exists());
}

#[test]
fn ingestion_failure_leaves_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "good.csv", "ID,X\n1,x\n");
    let bad = write(dir.path(), "bad.csv", "ID,X\n1,x\n2\n");
    let options = options_in(dir.path());
    fs::write(&options.output_path, "previous\n").unwrap();

    let err = run(&[good, bad], &options, false).unwrap_err();

    let ingest = err.downcast_ref::<IngestError>().expect("ingest error");
    assert_eq!(ingest.kind(), ErrorKind::MalformedRow);
    assert!(format!("{err:#}").contains("bad.csv"));
    assert_eq!(fs::read_to_string(&options.output_path).unwrap(), "previous\n");
    assert!(!temp_path_for(&options.output_path).exists());
}

#[test]
fn missing_identifier_column_is_a_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "Name\nAlice\n");
    let options = options_in(dir.path());

    let err = run(&[a], &options, false).unwrap_err();
    let ingest = err.downcast_ref::<IngestError>().expect("ingest error");
    assert_eq!(ingest.kind(), ErrorKind::Schema);
    assert!(!options.output_path.exists());
}

#[test]
fn unwritable_output_is_a_sink_error() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "ID,X\n1,x\n");
    let blocker = write(dir.path(), "blocker", "");
    let options = MergeOptions::default().with_output_path(blocker.join("combined.csv"));

    let err = run(&[a], &options, false).unwrap_err();
    let output = err.downcast_ref::<OutputError>().expect("output error");
    assert_eq!(output.kind(), ErrorKind::SinkWrite);
}

#[test]
fn non_default_policy_is_logged_at_info() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "ID,X\n1,x\n");
    let inputs = vec![a];

    let replace = options_in(dir.path()).with_merge_policy(MergePolicy::Replace);
    let logs = dry_run_logs(&inputs, &replace);
    assert!(logs.contains("non-default merge policy"), "{logs}");
    assert!(logs.contains("policy=Replace"), "{logs}");

    let logs = dry_run_logs(&inputs, &options_in(dir.path()));
    assert!(logs.contains("merged source"), "{logs}");
    assert!(!logs.contains("non-default merge policy"), "{logs}");
}
