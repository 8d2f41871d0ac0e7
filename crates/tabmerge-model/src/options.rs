//! Configuration options for a merge run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default identifier column name.
pub const DEFAULT_ID_COLUMN: &str = "ID";
/// Default value rendered for columns a record does not have.
pub const DEFAULT_PLACEHOLDER: &str = "";
/// Default `id` attribute of the table read from HTML sources.
pub const DEFAULT_HTML_TABLE_ID: &str = "directory";
/// Default output file.
pub const DEFAULT_OUTPUT_PATH: &str = "combined.csv";

/// How a record from a later source combines with an existing record that
/// has the same identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Overlay column by column: the later value wins for each column it
    /// carries, columns it lacks are kept.
    #[default]
    Union,
    /// The later record replaces the earlier record entirely.
    ///
    /// Only for reproducing output of the old replace-on-collision merge.
    Replace,
}

/// Quoting applied to fields of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Quote only fields containing a delimiter, quote or line break.
    #[default]
    Necessary,
    /// Quote every field.
    Always,
}

/// Options controlling a merge run.
///
/// Field names follow the camelCase keys used in configuration files
/// (`idColumnName`, `emptyCellPlaceholder`, ...). Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeOptions {
    /// Column holding the record identifier.
    pub id_column_name: String,
    /// Rendered for any schema column a record does not have.
    pub empty_cell_placeholder: String,
    /// `id` attribute of the table to read from HTML sources.
    pub html_table_identifier: String,
    /// Where the combined file is written.
    pub output_path: PathBuf,
    pub merge_policy: MergePolicy,
    pub quote_style: QuoteStyle,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            id_column_name: DEFAULT_ID_COLUMN.to_string(),
            empty_cell_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            html_table_identifier: DEFAULT_HTML_TABLE_ID.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            merge_policy: MergePolicy::default(),
            quote_style: QuoteStyle::default(),
        }
    }
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id_column(mut self, column: impl Into<String>) -> Self {
        self.id_column_name = column.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.empty_cell_placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_html_table(mut self, table_id: impl Into<String>) -> Self {
        self.html_table_identifier = table_id.into();
        self
    }

    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    #[must_use]
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = MergeOptions::default();
        assert_eq!(options.id_column_name, "ID");
        assert_eq!(options.empty_cell_placeholder, "");
        assert_eq!(options.html_table_identifier, "directory");
        assert_eq!(options.output_path, PathBuf::from("combined.csv"));
        assert_eq!(options.merge_policy, MergePolicy::Union);
        assert_eq!(options.quote_style, QuoteStyle::Necessary);
    }

    #[test]
    fn partial_config_file_keeps_defaults() {
        let options: MergeOptions = toml::from_str(
            r#"
            idColumnName = "Key"
            emptyCellPlaceholder = "N/A"
            mergePolicy = "replace"
            "#,
        )
        .expect("parse options");
        assert_eq!(options.id_column_name, "Key");
        assert_eq!(options.empty_cell_placeholder, "N/A");
        assert_eq!(options.merge_policy, MergePolicy::Replace);
        assert_eq!(options.html_table_identifier, "directory");
        assert_eq!(options.output_path, PathBuf::from("combined.csv"));
    }

    #[test]
    fn builder_overrides_fields() {
        let options = MergeOptions::new()
            .with_id_column("Code")
            .with_output_path("out/merged.csv")
            .with_quote_style(QuoteStyle::Always);
        assert_eq!(options.id_column_name, "Code");
        assert_eq!(options.output_path, PathBuf::from("out/merged.csv"));
        assert_eq!(options.quote_style, QuoteStyle::Always);
    }
}
