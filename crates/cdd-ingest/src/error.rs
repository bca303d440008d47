//! Error types for instrument file ingestion.

use std::path::PathBuf;

use cdd_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading and normalizing a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension not handled by any parser.
    #[error("unsupported file format '{extension}' for {path} (expected {expected})")]
    UnsupportedFormat {
        path: PathBuf,
        extension: String,
        expected: String,
    },

    // === Parsing Errors ===
    /// Failed to parse delimited text.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheets.
    #[error("workbook has no worksheets: {path}")]
    EmptyWorkbook { path: PathBuf },

    // === Header Errors ===
    /// The sheet ends before the header block does.
    #[error("header needs {needed} rows but the sheet has only {rows}")]
    HeaderOutOfRange { needed: usize, rows: usize },

    /// Fixed column names do not cover the sheet.
    #[error("layout defines {expected} column names but the sheet has {found} columns")]
    HeaderWidth { expected: usize, found: usize },

    /// A labelled cell outside the header grid is blank or out of range.
    #[error("expected a value in cell {cell} but it is empty")]
    MissingCell { cell: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
