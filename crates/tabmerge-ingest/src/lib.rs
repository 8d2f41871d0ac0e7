//! Source ingestion for tabmerge.
//!
//! This crate reads tabular sources into [`ParsedSource`] values: the ordered
//! header of the source plus one record per identifier.
//!
//! # Features
//!
//! - **CSV Loading**: comma-separated files with RFC 4180 quoting
//! - **HTML Tables**: a single table, selected by its `id` attribute
//! - **Discovery**: partition input paths by file extension
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabmerge_ingest::{SourceAdapter, SourceRegistry};
//!
//! let registry = SourceRegistry::new("directory");
//! let source = registry.read(Path::new("data/first.html"), "ID")?;
//! println!("{} records", source.records.len());
//! ```

mod adapter;
mod csv;
mod discovery;
mod error;
mod html;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Adapters ===
pub use adapter::{SourceAdapter, SourceRegistry};
pub use self::csv::{CsvAdapter, read_csv_source};
pub use html::{HtmlAdapter, read_html_source};

// === Discovery ===
pub use discovery::{DiscoveredSource, SourcePartition, partition_sources};

pub use tabmerge_model::{ParsedSource, SourceKind};
