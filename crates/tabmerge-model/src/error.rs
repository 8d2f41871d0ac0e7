//! Error classification shared across crates.

use std::fmt;

/// Broad class of a run failure.
///
/// Every crate-level error type maps onto one of these so callers can react
/// to the class of fault without matching on crate-specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The identifier column or the requested table is missing.
    Schema,
    /// A data row does not have as many fields as the header.
    MalformedRow,
    /// A source could not be opened or decoded.
    SourceUnreadable,
    /// The output file could not be created or written.
    SinkWrite,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::MalformedRow => "malformed row",
            Self::SourceUnreadable => "source unreadable",
            Self::SinkWrite => "sink write",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
