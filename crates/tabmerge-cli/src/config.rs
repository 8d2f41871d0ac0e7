//! Merge option resolution.
//!
//! Options come from three layers: built-in defaults, an optional TOML file,
//! and command-line flags. A flag wins over the file, the file wins over the
//! default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tabmerge_model::{MergeOptions, MergePolicy, QuoteStyle};

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub id_column: Option<String>,
    pub placeholder: Option<String>,
    pub html_table: Option<String>,
    pub output_path: Option<PathBuf>,
    pub merge_policy: Option<MergePolicy>,
    pub quote_style: Option<QuoteStyle>,
}

impl OptionOverrides {
    /// Replaces every option that was given explicitly.
    pub fn apply(self, mut options: MergeOptions) -> MergeOptions {
        if let Some(column) = self.id_column {
            options.id_column_name = column;
        }
        if let Some(placeholder) = self.placeholder {
            options.empty_cell_placeholder = placeholder;
        }
        if let Some(table_id) = self.html_table {
            options.html_table_identifier = table_id;
        }
        if let Some(path) = self.output_path {
            options.output_path = path;
        }
        if let Some(policy) = self.merge_policy {
            options.merge_policy = policy;
        }
        if let Some(style) = self.quote_style {
            options.quote_style = style;
        }
        options
    }
}

/// Loads merge options from a TOML file. Missing keys take their defaults.
pub fn load_options(path: &Path) -> Result<MergeOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config file {}", path.display()))
}

/// Resolves the options for a run.
pub fn resolve_options(config: Option<&Path>, overrides: OptionOverrides) -> Result<MergeOptions> {
    let base = match config {
        Some(path) => load_options(path)?,
        None => MergeOptions::default(),
    };
    Ok(overrides.apply(base))
}
