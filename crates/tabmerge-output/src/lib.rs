//! Output writing for tabmerge.
//!
//! Rendered rows are written as delimited text. File output goes through a
//! temporary sibling file that is renamed into place only after every row has
//! been written and synced, so a failed run never leaves a partial file at the
//! destination.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{CsvSink, WrittenOutput, temp_path_for};
