//! Consolidation engine for tabmerge.
//!
//! Sources are folded into a [`Consolidation`] one at a time, in input order:
//!
//! 1. [`UnifiedSchema::absorb`] appends columns not seen before;
//! 2. [`merge_into`] overlays the source's records onto the running store;
//! 3. [`Renderer::render`] lays the final store out against the schema.
//!
//! Merge order matters: when two sources carry the same column for the same
//! identifier, the source merged later wins for that column.

pub mod consolidate;
pub mod context;
pub mod render;
pub mod schema;

pub use consolidate::{MergeStats, merge, merge_into};
pub use context::Consolidation;
pub use render::{RenderedTable, Renderer};
pub use schema::UnifiedSchema;
