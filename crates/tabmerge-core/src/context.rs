//! Running consolidation state for one merge run.

use tabmerge_model::{MergeOptions, MergePolicy, ParsedSource, RecordStore};
use tracing::debug;

use crate::consolidate::{MergeStats, merge_into};
use crate::render::{RenderedTable, Renderer};
use crate::schema::UnifiedSchema;

/// Unified schema and record store, grown one source at a time.
///
/// Sources must be ingested in a stable order; a later source wins column
/// conflicts under [`MergePolicy::Union`].
#[derive(Debug, Clone)]
pub struct Consolidation {
    schema: UnifiedSchema,
    records: RecordStore,
    policy: MergePolicy,
    sources: usize,
}

impl Consolidation {
    pub fn new(id_column: impl Into<String>, policy: MergePolicy) -> Self {
        Self {
            schema: UnifiedSchema::new(id_column),
            records: RecordStore::new(),
            policy,
            sources: 0,
        }
    }

    pub fn from_options(options: &MergeOptions) -> Self {
        Self::new(options.id_column_name.as_str(), options.merge_policy)
    }

    /// Absorbs the source's columns into the schema, then merges its records.
    pub fn ingest(&mut self, source: ParsedSource) -> MergeStats {
        let new_columns = self.schema.absorb(&source.columns);
        let stats = merge_into(&mut self.records, source.records, self.policy);
        self.sources += 1;
        debug!(
            path = %source.path.display(),
            new_columns,
            inserted = stats.inserted,
            updated = stats.updated,
            overwritten = stats.overwritten,
            "merged source"
        );
        stats
    }

    pub fn schema(&self) -> &UnifiedSchema {
        &self.schema
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    /// Number of sources ingested so far.
    pub fn source_count(&self) -> usize {
        self.sources
    }

    /// Renders the current state with `placeholder` for absent columns.
    pub fn render(&self, placeholder: &str) -> RenderedTable {
        Renderer::new(self.schema.id_column(), placeholder)
            .render(&self.records, self.schema.columns())
    }

    pub fn into_parts(self) -> (RecordStore, UnifiedSchema) {
        (self.records, self.schema)
    }
}
