//! Dated CSV output files.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use cdd_model::{RunContext, Table};
use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use crate::error::{OutputError, Result};
use crate::frame::to_dataframe;

/// `<prefix>_<YYYYMMDD>.csv`.
pub fn output_file_name(prefix: &str, date_stamp: &str) -> String {
    format!("{prefix}_{date_stamp}.csv")
}

/// Full output path for `prefix` under the run's output directory.
pub fn output_path(ctx: &RunContext, prefix: &str) -> PathBuf {
    ctx.output_dir
        .join(output_file_name(prefix, &ctx.date_stamp()))
}

/// Writes `table` as CSV (header row, comma separated, no index column).
///
/// An existing file with the same name is overwritten.
pub fn write_output(table: &Table, ctx: &RunContext, prefix: &str) -> Result<PathBuf> {
    ensure_dir(&ctx.output_dir)?;
    let path = output_path(ctx, prefix);
    let mut df = to_dataframe(table)?;
    let mut file = File::create(&path).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    info!(
        path = %path.display(),
        rows = table.height(),
        "Output file saved to: {}",
        path.display()
    );
    Ok(path)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
