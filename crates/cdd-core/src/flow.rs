//! The shared assay reformat pipeline.

use std::fmt;
use std::path::{Path, PathBuf};

use cdd_ingest::{load_grid, normalize};
use cdd_model::{CellValue, RunContext, Table};
use cdd_output::{preview, write_output};
use cdd_transform::{OutputSpec, clean, format_output};
use cdd_validate::{Gate, ValidationPolicy, check_required};
use tracing::{info, info_span, warn};

use crate::assays::{AssayKind, BATCH_COLUMN};
use crate::error::{CoreError, Result};

/// Rows shown in diagnostic previews.
pub const PREVIEW_ROWS: usize = 5;

/// Result of one assay run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssayOutcome {
    Written { path: PathBuf, rows: usize },
    Skipped(SkipReason),
}

/// Why an assay run produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingFile(PathBuf),
    MissingColumns(Vec<String>),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile(path) => write!(f, "file at {} is missing", path.display()),
            Self::MissingColumns(columns) => {
                write!(f, "missing expected columns: {}", columns.join(", "))
            }
        }
    }
}

/// Reformats one instrument export into its upload file.
///
/// A missing source file or missing required columns skip the run with a
/// warning; everything else is an error.
pub fn reformat_assay(kind: AssayKind, path: &Path, ctx: &RunContext) -> Result<AssayOutcome> {
    let span = info_span!("assay", assay = kind.code(), path = %path.display());
    let _guard = span.enter();

    let Some(grid) = load_grid(path)? else {
        warn!("Processing skipped due to missing file.");
        return Ok(AssayOutcome::Skipped(SkipReason::MissingFile(
            path.to_path_buf(),
        )));
    };
    let batch = ctx
        .batch
        .as_deref()
        .ok_or(CoreError::MissingRunSetting { setting: "batch" })?;

    let config = kind.configure(&grid)?;
    let normalized = normalize(&grid, &config.layout)?;
    info!(columns = ?normalized.columns, "Column names after processing");

    let height = normalized.table.height();
    let table = normalized
        .table
        .with_column(BATCH_COLUMN, vec![CellValue::text(batch); height])?;

    let columns = config.column_refs();
    let report = check_required(kind.label(), &table, &columns);
    if let Gate::Skip(report) = ValidationPolicy::WarnAndSkip.enforce(report)? {
        return Ok(AssayOutcome::Skipped(SkipReason::MissingColumns(
            report.missing,
        )));
    }

    let table = clean(table, &config.rules)?;
    let table = format_output(table, &OutputSpec::new().order(&columns))?;
    log_preview(&format!("Preview of {} Data:", kind.label()), &table);

    let path = write_output(&table, ctx, kind.output_prefix())?;
    Ok(AssayOutcome::Written {
        path,
        rows: table.height(),
    })
}

/// Logs the first rows of `table` under `title`.
pub(crate) fn log_preview(title: &str, table: &Table) {
    match preview(table, PREVIEW_ROWS) {
        Ok(text) => info!("{title}\n{text}"),
        Err(err) => warn!(error = %err, "{title} (preview unavailable)"),
    }
}
