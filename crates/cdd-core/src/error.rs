use std::path::PathBuf;

use cdd_ingest::IngestError;
use cdd_model::ModelError;
use cdd_output::OutputError;
use cdd_transform::TransformError;
use cdd_validate::ValidationError;
use thiserror::Error;

/// Errors raised by the reformat flows.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A run-level value the flow injects into its output was not supplied.
    #[error("no {setting} configured for this run")]
    MissingRunSetting { setting: &'static str },

    /// An input the flow cannot run without does not exist.
    #[error("File at {} is missing.", .path.display())]
    MissingInput { path: PathBuf },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
