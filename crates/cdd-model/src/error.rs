use thiserror::Error;

/// Errors raised when a table operation would break the table invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A column does not match the row count of the table.
    #[error("column '{column}' has {found} values but the table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    /// A row has more cells than the table has columns.
    #[error("row {row} has {found} cells but only {expected} columns are defined")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Column lookup failed.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
