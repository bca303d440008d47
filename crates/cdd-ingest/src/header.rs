//! Header normalization for ragged instrument layouts.
//!
//! Instrument exports put one or two header rows at a fixed offset. Two-row
//! headers carry a primary label that spans several columns (written once,
//! blank to its right) and an optional secondary label per column. The
//! normalizer flattens either form into one name per column and returns the
//! data rows below as a [`Table`].

use cdd_model::{CellValue, Table, forward_fill, format_numeric};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::grid::{RawGrid, cell_reference};

/// How the header block is shaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderShape {
    /// One row of column names, taken verbatim.
    Single,
    /// Primary row (forward-filled) plus secondary row joined by `separator`.
    Double { separator: String },
    /// Names supplied by the caller; `header_rows` rows are skipped.
    Fixed {
        names: Vec<String>,
        header_rows: usize,
    },
}

impl HeaderShape {
    fn height(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double { .. } => 2,
            Self::Fixed { header_rows, .. } => *header_rows,
        }
    }
}

/// A labelled cell sitting outside the header grid.
///
/// Only a couple of layouts have one; it is injected as an extra column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataCell {
    /// Column `label` holds the cell's value on the first data row only.
    FirstRowValue {
        row: usize,
        col: usize,
        label: String,
    },
    /// The cell's text names a new column whose values are all blank.
    LabelOnly { row: usize, col: usize },
}

/// Header configuration for one instrument layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub shape: HeaderShape,
    /// Index of the first header row.
    pub header_row: usize,
    /// Data columns forward-filled downward after flattening.
    pub fill_down: Vec<String>,
    pub metadata: Option<MetadataCell>,
}

impl HeaderLayout {
    pub fn single() -> Self {
        Self::new(HeaderShape::Single)
    }

    pub fn double(separator: impl Into<String>) -> Self {
        Self::new(HeaderShape::Double {
            separator: separator.into(),
        })
    }

    pub fn fixed(names: Vec<String>, header_rows: usize) -> Self {
        Self::new(HeaderShape::Fixed { names, header_rows })
    }

    fn new(shape: HeaderShape) -> Self {
        Self {
            shape,
            header_row: 0,
            fill_down: Vec::new(),
            metadata: None,
        }
    }

    #[must_use]
    pub fn starting_at(mut self, header_row: usize) -> Self {
        self.header_row = header_row;
        self
    }

    #[must_use]
    pub fn with_fill_down(mut self, columns: &[&str]) -> Self {
        self.fill_down = columns.iter().map(|c| (*c).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, cell: MetadataCell) -> Self {
        self.metadata = Some(cell);
        self
    }

    /// First row index below the header block.
    pub fn data_start(&self) -> usize {
        self.header_row + self.shape.height()
    }
}

/// Flattened table plus the column names it ended up with.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    pub table: Table,
    pub columns: Vec<String>,
}

/// Flattens the header block of `grid` and returns the data rows below it.
///
/// Rows in which every cell is blank are dropped.
pub fn normalize(grid: &RawGrid, layout: &HeaderLayout) -> Result<NormalizedTable> {
    let data_start = layout.data_start();
    if grid.height() < data_start {
        return Err(IngestError::HeaderOutOfRange {
            needed: data_start,
            rows: grid.height(),
        });
    }
    let header_row = |offset: usize| grid.row(layout.header_row + offset).unwrap_or_default();

    let names = match &layout.shape {
        HeaderShape::Single => header_row(0).iter().map(header_text).collect(),
        HeaderShape::Double { separator } => {
            flatten_header(header_row(0), header_row(1), separator)
        }
        HeaderShape::Fixed { names, .. } => {
            if grid.width() > names.len() {
                return Err(IngestError::HeaderWidth {
                    expected: names.len(),
                    found: grid.width(),
                });
            }
            names.clone()
        }
    };

    let rows: Vec<Vec<CellValue>> = grid.rows()[data_start..]
        .iter()
        .filter(|row| !row.iter().all(CellValue::is_blank))
        .cloned()
        .collect();
    let mut table = Table::from_rows(names, rows)?;

    for column in &layout.fill_down {
        table = table.fill_down(column)?;
    }
    if let Some(cell) = &layout.metadata {
        table = inject_metadata(grid, table, cell)?;
    }

    let columns: Vec<String> = table.column_names().into_iter().map(str::to_string).collect();
    debug!(
        columns = ?columns,
        rows = table.height(),
        "normalized header"
    );
    Ok(NormalizedTable { table, columns })
}

/// Flattens a two-row header.
///
/// The primary row is forward-filled across blanks; a column's name is the
/// primary label alone when its secondary label is blank, otherwise
/// `primary + separator + secondary`. A column with no primary label to
/// inherit takes its secondary label alone.
///
/// # Examples
///
/// ```
/// use cdd_ingest::flatten_header;
/// use cdd_model::CellValue;
///
/// let primary = [
///     CellValue::text("A"),
///     CellValue::Absent,
///     CellValue::Absent,
///     CellValue::text("B"),
/// ];
/// let secondary = [
///     CellValue::Absent,
///     CellValue::text("X"),
///     CellValue::text("Y"),
///     CellValue::Absent,
/// ];
/// assert_eq!(flatten_header(&primary, &secondary, "_"), ["A", "A_X", "A_Y", "B"]);
/// ```
pub fn flatten_header(
    primary: &[CellValue],
    secondary: &[CellValue],
    separator: &str,
) -> Vec<String> {
    let filled = forward_fill(primary);
    filled
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let primary = header_text(cell);
            let secondary = secondary.get(idx).map(header_text).unwrap_or_default();
            match (primary.is_empty(), secondary.is_empty()) {
                (_, true) => primary,
                (true, false) => secondary,
                (false, false) => format!("{primary}{separator}{secondary}"),
            }
        })
        .collect()
}

fn header_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(value) => format_numeric(*value),
        CellValue::Text(text) if text.trim().is_empty() => String::new(),
        CellValue::Text(text) => text.clone(),
        CellValue::Absent => String::new(),
    }
}

fn inject_metadata(grid: &RawGrid, table: Table, cell: &MetadataCell) -> Result<Table> {
    let height = table.height();
    match cell {
        MetadataCell::FirstRowValue { row, col, label } => {
            let value = grid.get(*row, *col).cloned().unwrap_or_default();
            debug!(
                cell = %cell_reference(*row, *col),
                label = %label,
                "injecting metadata cell on first data row"
            );
            let mut values = vec![CellValue::Absent; height];
            if let Some(first) = values.first_mut() {
                *first = value;
            }
            Ok(table.with_column(label, values)?)
        }
        MetadataCell::LabelOnly { row, col } => {
            let label = grid.cell_text(*row, *col)?;
            debug!(
                cell = %cell_reference(*row, *col),
                label = %label,
                "injecting metadata label as blank column"
            );
            Ok(table.with_column(&label, vec![CellValue::Absent; height])?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::infer(v)).collect()
    }

    #[test]
    fn single_header_takes_first_row_verbatim() {
        let grid = RawGrid::new(vec![
            text_row(&["Compound ", "%Recovery"]),
            text_row(&["CMP-1", "98.5"]),
        ]);
        let normalized = normalize(&grid, &HeaderLayout::single()).unwrap();
        assert_eq!(normalized.columns, vec!["Compound ", "%Recovery"]);
        assert_eq!(normalized.table.height(), 1);
    }

    #[test]
    fn double_header_starts_at_offset() {
        let grid = RawGrid::new(vec![
            text_row(&["MDCK-MDR1", "", ""]),
            text_row(&["Compound", "Papp", ""]),
            text_row(&["", "Mean", "SD"]),
            text_row(&["CMP-1", "1.5", "0.1"]),
            text_row(&["", "", ""]),
        ]);
        let layout = HeaderLayout::double(" ").starting_at(1);
        let normalized = normalize(&grid, &layout).unwrap();
        assert_eq!(normalized.columns, vec!["Compound", "Papp Mean", "Papp SD"]);
        assert_eq!(normalized.table.height(), 1);
    }

    #[test]
    fn leading_blank_primary_uses_secondary_label() {
        let names = flatten_header(
            &text_row(&["", "t1/2 (min)"]),
            &text_row(&["Compound", "Mean"]),
            "_",
        );
        assert_eq!(names, vec!["Compound", "t1/2 (min)_Mean"]);
    }

    #[test]
    fn header_out_of_range_is_reported() {
        let grid = RawGrid::new(vec![text_row(&["only"])]);
        let err = normalize(&grid, &HeaderLayout::double("_")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::HeaderOutOfRange { needed: 2, rows: 1 }
        ));
    }

    #[test]
    fn fixed_names_must_cover_sheet() {
        let grid = RawGrid::new(vec![text_row(&["a", "b", "c"])]);
        let layout = HeaderLayout::fixed(vec!["A".into(), "B".into()], 1);
        assert!(matches!(
            normalize(&grid, &layout),
            Err(IngestError::HeaderWidth {
                expected: 2,
                found: 3
            })
        ));
    }
}
