//! Raw cell grid as read from a source file, before any header handling.

use cdd_model::{CellValue, format_numeric};

use crate::error::{IngestError, Result};

/// Rectangular grid of cells; row 0 / column 0 is the sheet's `A1`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawGrid {
    rows: Vec<Vec<CellValue>>,
    width: usize,
}

impl RawGrid {
    /// Builds a grid, padding ragged rows with `Absent` to the widest row.
    pub fn new(mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, CellValue::Absent);
        }
        Self { rows, width }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&[CellValue]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Text of a single labelled cell, e.g. a buffer name above the header.
    pub fn cell_text(&self, row: usize, col: usize) -> Result<String> {
        match self.get(row, col) {
            Some(CellValue::Text(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Some(CellValue::Number(value)) => Ok(format_numeric(*value)),
            _ => Err(IngestError::MissingCell {
                cell: cell_reference(row, col),
            }),
        }
    }
}

/// Spreadsheet-style reference for zero-based coordinates (`(0, 11)` → `L1`).
pub fn cell_reference(row: usize, col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.reverse();
    let mut out: String = letters.into_iter().collect();
    out.push_str(&(row + 1).to_string());
    out
}
