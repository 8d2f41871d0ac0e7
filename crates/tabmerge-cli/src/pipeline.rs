//! Merge pipeline with explicit stages.
//!
//! 1. **Discover**: split inputs into recognized sources and skipped paths
//! 2. **Consolidate**: read each source in input order and merge it
//! 3. **Render**: lay the records out against the unified schema
//! 4. **Output**: write the combined file atomically (skipped for dry runs)
//!
//! Any failure before the output stage aborts the run with nothing written.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace, warn};

use tabmerge_core::{Consolidation, RenderedTable};
use tabmerge_ingest::{SourcePartition, SourceRegistry, partition_sources};
use tabmerge_model::{MergeOptions, MergePolicy, ParsedSource};
use tabmerge_output::{CsvSink, WrittenOutput};

use crate::logging::redact_value;
use crate::types::{RunResult, SourceSummary};

/// Runs the whole pipeline over `inputs`.
pub fn run<P: AsRef<Path>>(inputs: &[P], options: &MergeOptions, dry_run: bool) -> Result<RunResult> {
    let partition = discover(inputs);
    let (consolidation, sources) = consolidate(&partition, options)?;
    let table = render(&consolidation, options);

    let written = if dry_run {
        info!(path = %options.output_path.display(), "dry run, output not written");
        false
    } else {
        write_output(&table, options)?;
        true
    };

    Ok(RunResult {
        output_path: options.output_path.clone(),
        written,
        sources,
        skipped: partition.unrecognized,
        columns: consolidation.schema().len(),
        records: consolidation.records().len(),
    })
}

// ============================================================================
// Stage 1: Discover
// ============================================================================

pub fn discover<P: AsRef<Path>>(inputs: &[P]) -> SourcePartition {
    let partition = partition_sources(inputs);
    if partition.is_empty() {
        warn!("no CSV or HTML inputs, output will contain the header only");
    }
    debug!(
        sources = partition.sources.len(),
        skipped = partition.unrecognized.len(),
        "discovered inputs"
    );
    partition
}

// ============================================================================
// Stage 2: Consolidate
// ============================================================================

/// Reads and merges every recognized source, in input order.
///
/// Stops at the first source that cannot be read.
pub fn consolidate(
    partition: &SourcePartition,
    options: &MergeOptions,
) -> Result<(Consolidation, Vec<SourceSummary>)> {
    if options.merge_policy != MergePolicy::default() {
        info!(policy = ?options.merge_policy, "non-default merge policy");
    }
    let registry = SourceRegistry::new(options.html_table_identifier.as_str());
    let mut consolidation = Consolidation::from_options(options);
    let mut summaries = Vec::with_capacity(partition.sources.len());

    for discovered in &partition.sources {
        let span = info_span!("source", path = %discovered.path.display(), kind = %discovered.kind);
        let _guard = span.enter();

        let source = registry
            .adapter(discovered.kind)
            .read(&discovered.path, &options.id_column_name)
            .with_context(|| format!("read {}", discovered.path.display()))?;
        trace_records(&source);

        let schema_before = consolidation.schema().len();
        let rows = source.row_count;
        let columns = source.columns.len();
        let duplicate_ids = source.duplicate_ids;
        let stats = consolidation.ingest(source);
        let new_columns = consolidation.schema().len() - schema_before;

        info!(
            rows,
            inserted = stats.inserted,
            updated = stats.updated,
            "merged source"
        );
        summaries.push(SourceSummary {
            path: discovered.path.clone(),
            kind: discovered.kind,
            rows,
            columns,
            new_columns,
            duplicate_ids,
            stats,
        });
    }

    Ok((consolidation, summaries))
}

fn trace_records(source: &ParsedSource) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    for (id, record) in source.records.iter() {
        for (column, value) in record.iter() {
            trace!(id = redact_value(id), column, value = redact_value(value), "cell");
        }
    }
}

// ============================================================================
// Stage 3: Render
// ============================================================================

pub fn render(consolidation: &Consolidation, options: &MergeOptions) -> RenderedTable {
    let table = consolidation.render(&options.empty_cell_placeholder);
    debug!(rows = table.len(), width = table.width(), "rendered output");
    table
}

// ============================================================================
// Stage 4: Output
// ============================================================================

pub fn write_output(table: &RenderedTable, options: &MergeOptions) -> Result<WrittenOutput> {
    let written = CsvSink::new(options.quote_style)
        .write_file(&options.output_path, table.all_rows())
        .with_context(|| format!("write {}", options.output_path.display()))?;
    info!(path = %written.path.display(), rows = written.rows, "wrote combined output");
    Ok(written)
}
