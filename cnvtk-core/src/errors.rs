use thiserror::Error;

/// Error type for table construction, lookup, and combination.
#[derive(Error, Debug)]
pub enum TableError {
    /// A table needs at least chromosome, start, and end columns.
    #[error("data table must have at least 'chromosome', 'start', 'end' columns (missing {missing:?})")]
    MissingRequiredColumns { missing: Vec<String> },

    /// A row's attributes do not line up with the table's columns.
    #[error("row {row} does not match the table columns {columns:?}")]
    RowSchemaMismatch { row: usize, columns: Vec<String> },

    #[error("no column named '{0}' in this table")]
    ColumnNotFound(String),

    #[error("chromosome '{0}' is not in this table")]
    ChromosomeNotFound(String),

    #[error("row index {index} out of bounds for table of {len} rows")]
    RowOutOfBounds { index: usize, len: usize },

    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A coordinate column was assigned values of the wrong type.
    #[error("column '{column}' takes {expected} values")]
    TypeMismatch {
        column: String,
        expected: &'static str,
    },

    /// Tables with different attribute columns cannot be merged.
    #[error("cannot merge tables with different columns: {left:?} vs {right:?}")]
    IncompatibleColumns { left: Vec<String>, right: Vec<String> },
}

pub type Result<T> = std::result::Result<T, TableError>;
