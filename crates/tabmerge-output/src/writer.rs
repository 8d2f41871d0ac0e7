//! Delimited-text writer with atomic file replacement.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tabmerge_model::QuoteStyle;
use tracing::{debug, warn};

use crate::error::{OutputError, Result};

/// Summary of a completed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutput {
    pub path: PathBuf,
    /// Rows written, header included.
    pub rows: usize,
}

/// Writes rows as CSV.
#[derive(Debug, Clone, Copy)]
pub struct CsvSink {
    delimiter: u8,
    quote_style: QuoteStyle,
}

impl Default for CsvSink {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_style: QuoteStyle::default(),
        }
    }
}

impl CsvSink {
    pub fn new(quote_style: QuoteStyle) -> Self {
        Self {
            quote_style,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(match self.quote_style {
                QuoteStyle::Necessary => csv::QuoteStyle::Necessary,
                QuoteStyle::Always => csv::QuoteStyle::Always,
            });
        builder
    }

    /// Writes `rows` to `output`, returning how many were written.
    ///
    /// `label` names the destination in errors.
    pub fn write_to<'a, W, I>(&self, output: W, label: &Path, rows: I) -> Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut writer = self.builder().from_writer(output);
        let mut count = 0;
        for row in rows {
            writer
                .write_record(row)
                .map_err(|source| OutputError::Write {
                    path: label.to_path_buf(),
                    row: count + 1,
                    source,
                })?;
            count += 1;
        }
        writer.flush().map_err(|source| OutputError::Flush {
            path: label.to_path_buf(),
            source,
        })?;
        Ok(count)
    }

    /// Writes `rows` to `path` atomically.
    ///
    /// Rows go to a temporary sibling file that is synced and then renamed
    /// over `path`. On any failure the temporary file is removed and an
    /// existing file at `path` is left untouched. Missing parent directories
    /// are created.
    pub fn write_file<'a, I>(&self, path: &Path, rows: I) -> Result<WrittenOutput>
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = temp_path_for(path);
        let file = File::create(&temp_path).map_err(|source| OutputError::Create {
            path: temp_path.clone(),
            source,
        })?;
        let guard = TempFileGuard::new(&temp_path);

        let mut buffered = io::BufWriter::new(file);
        let rows = self.write_to(&mut buffered, path, rows)?;
        let file = buffered
            .into_inner()
            .map_err(|err| OutputError::Flush {
                path: temp_path.clone(),
                source: err.into_error(),
            })?;
        file.sync_all().map_err(|source| OutputError::Flush {
            path: temp_path.clone(),
            source,
        })?;
        drop(file);

        fs::rename(&temp_path, path).map_err(|source| OutputError::Persist {
            from: temp_path.clone(),
            path: path.to_path_buf(),
            source,
        })?;
        guard.disarm();

        debug!(path = %path.display(), rows, "wrote output");
        Ok(WrittenOutput {
            path: path.to_path_buf(),
            rows,
        })
    }
}

/// Temporary sibling used while writing `path`: `<name>.tmp` in the same
/// directory, so the final rename never crosses a filesystem.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Removes the temporary file on drop unless disarmed.
struct TempFileGuard<'a> {
    path: &'a Path,
    armed: bool,
}

impl<'a> TempFileGuard<'a> {
    fn new(path: &'a Path) -> Self {
        Self { path, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for TempFileGuard<'_> {
    fn drop(&mut self) {
        if self.armed
            && let Err(error) = fs::remove_file(self.path)
            && error.kind() != io::ErrorKind::NotFound
        {
            warn!(path = %self.path.display(), %error, "failed to remove temporary output");
        }
    }
}
