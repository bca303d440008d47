//! What a flow does when a required column is absent.

use tracing::warn;

use crate::error::Result;
use crate::schema::SchemaReport;

/// Caller-selected reaction to an incomplete schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Fail the run with the enumerated missing columns.
    #[default]
    Abort,
    /// Log a warning and skip the run without output.
    WarnAndSkip,
}

/// Decision after applying a policy to a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    Skip(SchemaReport),
}

impl ValidationPolicy {
    pub fn enforce(self, report: SchemaReport) -> Result<Gate> {
        if report.is_complete() {
            return Ok(Gate::Proceed);
        }
        match self {
            Self::Abort => Err(report.into_error()),
            Self::WarnAndSkip => {
                warn!(
                    source = %report.source,
                    missing = ?report.missing,
                    "Warning: Missing expected columns {:?}",
                    report.missing
                );
                Ok(Gate::Skip(report))
            }
        }
    }
}
