//! Shared data model for tabmerge.
//!
//! Sources are read into [`ParsedSource`] values: an ordered header plus a
//! [`RecordStore`] keyed by record identifier. The consolidation engine merges
//! those stores and renders them against a unified schema.

pub mod error;
pub mod options;
pub mod record;
pub mod source;

pub use error::ErrorKind;
pub use options::{
    DEFAULT_HTML_TABLE_ID, DEFAULT_ID_COLUMN, DEFAULT_OUTPUT_PATH, DEFAULT_PLACEHOLDER,
    MergeOptions, MergePolicy, QuoteStyle,
};
pub use record::{Record, RecordStore};
pub use source::{ParsedSource, SourceKind};
