//! HTML table sources.

mod reader;
mod text;

pub use reader::{HtmlAdapter, read_html_source};
