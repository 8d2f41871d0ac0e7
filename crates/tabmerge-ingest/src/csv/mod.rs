//! Delimited-text sources.

mod reader;

pub use reader::{CsvAdapter, read_csv_source};
