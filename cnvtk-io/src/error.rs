use std::io;
use std::path::Path;

use thiserror::Error;

use cnvtk_core::TableError;

/// Error type for cnvtk-io operations.
#[derive(Error, Debug)]
pub enum FormatError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The format tag is not in the registry.
    #[error("unknown format: '{0}'")]
    UnknownFormat(String),

    /// A line does not parse under the chosen format.
    #[error("{path}:{line}: {reason}")]
    BadLine {
        path: String,
        line: usize,
        reason: String,
    },

    /// The parsed rows violated the table schema.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result type alias for cnvtk-io operations.
pub type Result<T> = std::result::Result<T, FormatError>;

pub(crate) fn bad_line(path: &Path, line: usize, reason: impl Into<String>) -> FormatError {
    FormatError::BadLine {
        path: path.display().to_string(),
        line,
        reason: reason.into(),
    }
}

pub(crate) fn parse_coord(field: &str, what: &str, path: &Path, line: usize) -> Result<i64> {
    field
        .trim()
        .parse()
        .map_err(|_| bad_line(path, line, format!("invalid {what} '{field}'")))
}
