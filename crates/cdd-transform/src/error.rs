use cdd_model::ModelError;
use thiserror::Error;

/// Errors raised by table transformations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Right-side rows whose key has no partner on the left.
    #[error(
        "Mismatch found: The following '{right_key}S' in File 2 did not match any '{left_key}' in File 1:\n{}\nPlease double check these '{right_key}' values.",
        .keys.join(", ")
    )]
    UnmatchedJoinKeys {
        left_key: String,
        right_key: String,
        keys: Vec<String>,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;

impl TransformError {
    pub(crate) fn missing(column: &str) -> Self {
        Self::ColumnNotFound {
            column: column.to_string(),
        }
    }
}
