//! CLI argument definitions for tabmerge.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tabmerge_cli::config::OptionOverrides;
use tabmerge_model::{MergePolicy, QuoteStyle};

#[derive(Parser)]
#[command(
    name = "tabmerge",
    version,
    about = "Merge CSV files and HTML tables into one CSV keyed by an identifier column",
    long_about = "Merge CSV files and HTML tables into one CSV keyed by an identifier column.\n\n\
                  Sources are merged in the order given; for a shared identifier the later \
                  source wins each column it carries. Output rows are sorted by identifier \
                  and every missing cell is filled with the placeholder."
)]
pub struct Cli {
    /// Source files (.csv, .html, .htm). Other extensions are skipped.
    #[arg(value_name = "FILES", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// TOML file with merge options (flags override its values).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Combined output file [default: combined.csv].
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Column holding the record identifier [default: ID].
    #[arg(long = "id-column", value_name = "NAME")]
    pub id_column: Option<String>,

    /// Value written for columns a record does not have [default: empty].
    #[arg(long = "placeholder", value_name = "TEXT", allow_hyphen_values = true)]
    pub placeholder: Option<String>,

    /// `id` attribute of the table read from HTML sources [default: directory].
    #[arg(long = "html-table", value_name = "ID")]
    pub html_table: Option<String>,

    /// How records sharing an identifier are combined [default: union].
    #[arg(long = "merge-policy", value_enum)]
    pub merge_policy: Option<MergePolicyArg>,

    /// Which output fields are quoted [default: necessary].
    #[arg(long = "quote-style", value_enum)]
    pub quote_style: Option<QuoteStyleArg>,

    /// Merge and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Allow cell values in trace-level logs.
    #[arg(long = "log-data")]
    pub log_data: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Merge options given explicitly on the command line.
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            id_column: self.id_column.clone(),
            placeholder: self.placeholder.clone(),
            html_table: self.html_table.clone(),
            output_path: self.output.clone(),
            merge_policy: self.merge_policy.map(MergePolicy::from),
            quote_style: self.quote_style.map(QuoteStyle::from),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MergePolicyArg {
    /// Later sources win per column; other columns are kept.
    Union,
    /// Later sources replace the whole record.
    Replace,
}

impl From<MergePolicyArg> for MergePolicy {
    fn from(arg: MergePolicyArg) -> Self {
        match arg {
            MergePolicyArg::Union => Self::Union,
            MergePolicyArg::Replace => Self::Replace,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum QuoteStyleArg {
    /// Quote fields containing a delimiter, quote or line break.
    Necessary,
    /// Quote every field.
    Always,
}

impl From<QuoteStyleArg> for QuoteStyle {
    fn from(arg: QuoteStyleArg) -> Self {
        match arg {
            QuoteStyleArg::Necessary => Self::Necessary,
            QuoteStyleArg::Always => Self::Always,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
