//! Per-run settings shared by every reformat flow.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Session-level values injected into outputs and used for file naming.
///
/// The run date is explicit so a run is reproducible; only the CLI reads the
/// wall clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub project: Option<String>,
    pub chemist: Option<String>,
    pub batch: Option<String>,
    pub run_date: NaiveDate,
    pub output_dir: PathBuf,
}

impl RunContext {
    /// A context writing into the current working directory.
    pub fn new(run_date: NaiveDate) -> Self {
        Self {
            project: None,
            chemist: None,
            batch: None,
            run_date,
            output_dir: PathBuf::from("."),
        }
    }

    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    #[must_use]
    pub fn with_chemist(mut self, chemist: impl Into<String>) -> Self {
        self.chemist = Some(chemist.into());
        self
    }

    #[must_use]
    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = Some(batch.into());
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Run date as `YYYYMMDD`.
    pub fn date_stamp(&self) -> String {
        self.run_date.format("%Y%m%d").to_string()
    }
}
