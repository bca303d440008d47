//! Source file loading for `.csv` and `.xlsx` instrument exports.

use std::fmt;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use cdd_model::CellValue;
use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::grid::RawGrid;

/// Parsers selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xlsx,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 2] = [SourceFormat::Csv, SourceFormat::Xlsx];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => ".csv",
            Self::Xlsx => ".xlsx",
        }
    }

    /// Picks the parser for `path` among `allowed` formats (case-insensitive).
    pub fn detect(path: &Path, allowed: &[SourceFormat]) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        allowed
            .iter()
            .copied()
            .find(|format| format.extension() == extension)
            .ok_or_else(|| IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: if extension.is_empty() {
                    "<none>".to_string()
                } else {
                    extension
                },
                expected: allowed
                    .iter()
                    .map(|f| f.extension())
                    .collect::<Vec<_>>()
                    .join(" or "),
            })
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Loads a `.csv` or `.xlsx` file into a raw grid.
///
/// A missing file is not an error: it is logged and `None` is returned so the
/// caller can skip the run.
pub fn load_grid(path: &Path) -> Result<Option<RawGrid>> {
    load_grid_as(path, &SourceFormat::ALL)
}

/// Like [`load_grid`], restricted to the given formats.
pub fn load_grid_as(path: &Path, allowed: &[SourceFormat]) -> Result<Option<RawGrid>> {
    if !path.is_file() {
        warn!(path = %path.display(), "File at {} is missing.", path.display());
        return Ok(None);
    }
    let format = SourceFormat::detect(path, allowed)?;
    let grid = match format {
        SourceFormat::Csv => read_csv_grid(path)?,
        SourceFormat::Xlsx => read_xlsx_grid(path)?,
    };
    debug!(
        path = %path.display(),
        %format,
        rows = grid.height(),
        columns = grid.width(),
        "loaded source grid"
    );
    Ok(Some(grid))
}

fn normalize_cell(raw: &str) -> CellValue {
    CellValue::infer(raw.trim_start_matches('\u{feff}'))
}

fn read_csv_grid(path: &Path) -> Result<RawGrid> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::read(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    Ok(RawGrid::new(rows))
}

fn read_xlsx_grid(path: &Path) -> Result<RawGrid> {
    let workbook_error = |message: String| IngestError::Workbook {
        path: path.to_path_buf(),
        message,
    };
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: calamine::XlsxError| workbook_error(e.to_string()))?;
    let sheet_names = workbook.sheet_names().to_owned();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    };
    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| workbook_error(e.to_string()))?;

    // NOTE: calamine `Range` coordinates are relative to `range.start()`; the
    // grid keeps absolute sheet coordinates so fixed cell positions line up.
    let (row_offset, col_offset) = range
        .start()
        .map_or((0, 0), |(row, col)| (row as usize, col as usize));
    let (height, width) = range.get_size();
    let mut rows = vec![vec![CellValue::Absent; col_offset + width]; row_offset + height];
    for (row, col, data) in range.cells() {
        rows[row_offset + row][col_offset + col] = convert_data(data);
    }
    Ok(RawGrid::new(rows))
}

fn convert_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Absent,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::String(s) if s.trim().is_empty() => CellValue::Absent,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::text(if *b { "TRUE" } else { "FALSE" }),
        other => CellValue::Text(other.to_string()),
    }
}
