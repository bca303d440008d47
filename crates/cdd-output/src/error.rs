use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    // === File System Errors ===
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Frame Errors ===
    #[error("failed to build output frame: {0}")]
    Frame(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, OutputError>;
