use crate::cell::CellValue;
use crate::error::{ModelError, Result};
use crate::fill::forward_fill;

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// A column repeating one value `height` times.
    pub fn constant(name: impl Into<String>, value: &CellValue, height: usize) -> Self {
        Self::new(name, vec![value.clone(); height])
    }
}

/// An ordered set of equally long columns.
///
/// Duplicate names are tolerated (instrument headers sometimes repeat a
/// label); lookups by name resolve to the first match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    height: usize,
}

impl Table {
    /// Creates a table with the given number of rows and no columns.
    pub fn with_height(height: usize) -> Self {
        Self {
            columns: Vec::new(),
            height,
        }
    }

    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let height = columns.first().map_or(0, |c| c.values.len());
        let mut table = Self::with_height(height);
        for column in columns {
            table = table.push_column(column)?;
        }
        Ok(table)
    }

    /// Builds a table from row-major cells. Short rows are padded with `Absent`.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let width = names.len();
        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows.len())))
            .collect();
        let height = rows.len();
        for (row_idx, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                return Err(ModelError::RowWidth {
                    row: row_idx,
                    expected: width,
                    found: row.len(),
                });
            }
            row.resize(width, CellValue::Absent);
            for (column, cell) in columns.iter_mut().zip(row) {
                column.values.push(cell);
            }
        }
        Ok(Self { columns, height })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Values of the named column.
    pub fn values(&self, name: &str) -> Result<&[CellValue]> {
        self.column(name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| ModelError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&CellValue> {
        self.column(name).and_then(|c| c.values.get(row))
    }

    /// Cells of one row in column order.
    pub fn row(&self, idx: usize) -> Vec<&CellValue> {
        self.columns
            .iter()
            .filter_map(|c| c.values.get(idx))
            .collect()
    }

    /// Appends a column, checking its length against the table height.
    pub fn push_column(mut self, column: Column) -> Result<Self> {
        if column.values.len() != self.height {
            return Err(ModelError::ColumnLength {
                column: column.name,
                expected: self.height,
                found: column.values.len(),
            });
        }
        self.columns.push(column);
        Ok(self)
    }

    /// Replaces the named column, or appends it when it does not exist yet.
    pub fn with_column(mut self, name: &str, values: Vec<CellValue>) -> Result<Self> {
        match self.column_index(name) {
            Some(idx) => {
                if values.len() != self.height {
                    return Err(ModelError::ColumnLength {
                        column: name.to_string(),
                        expected: self.height,
                        found: values.len(),
                    });
                }
                self.columns[idx].values = values;
                Ok(self)
            }
            None => self.push_column(Column::new(name, values)),
        }
    }

    /// Rewrites every cell of the named column.
    pub fn map_column<F>(mut self, name: &str, mut f: F) -> Result<Self>
    where
        F: FnMut(&CellValue) -> CellValue,
    {
        let idx = self
            .column_index(name)
            .ok_or_else(|| ModelError::ColumnNotFound {
                column: name.to_string(),
            })?;
        let column = &mut self.columns[idx];
        column.values = column.values.iter().map(&mut f).collect();
        Ok(self)
    }

    /// Forward-fills the named column downward across blank cells.
    pub fn fill_down(self, name: &str) -> Result<Self> {
        let filled = forward_fill(self.values(name)?);
        self.with_column(name, filled)
    }

    /// Keeps rows whose mask entry is `true`.
    pub fn filter_rows(self, keep: &[bool]) -> Self {
        debug_assert_eq!(keep.len(), self.height);
        let height = keep.iter().filter(|k| **k).count();
        let columns = self
            .columns
            .into_iter()
            .map(|column| Column {
                name: column.name,
                values: column
                    .values
                    .into_iter()
                    .zip(keep)
                    .filter_map(|(value, keep)| keep.then_some(value))
                    .collect(),
            })
            .collect();
        Self { columns, height }
    }

    /// Gathers rows by index; indices may repeat.
    pub fn take_rows(&self, indices: &[usize]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|column| Column {
                name: column.name.clone(),
                values: indices
                    .iter()
                    .map(|&idx| column.values.get(idx).cloned().unwrap_or_default())
                    .collect(),
            })
            .collect();
        Self {
            columns,
            height: indices.len(),
        }
    }

    /// Projects the named columns in the given order.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let mut out = Self::with_height(self.height);
        for name in names {
            let column = self.column(name).ok_or_else(|| ModelError::ColumnNotFound {
                column: (*name).to_string(),
            })?;
            out.columns.push(column.clone());
        }
        Ok(out)
    }

    pub fn rename(mut self, from: &str, to: &str) -> Result<Self> {
        let idx = self
            .column_index(from)
            .ok_or_else(|| ModelError::ColumnNotFound {
                column: from.to_string(),
            })?;
        self.columns[idx].name = to.to_string();
        Ok(self)
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.height);
        let indices: Vec<usize> = (0..n).collect();
        self.take_rows(&indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(
            vec!["A".into(), "B".into()],
            vec![
                vec![CellValue::text("x"), CellValue::Number(1.0)],
                vec![CellValue::text("y")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn from_rows_pads_short_rows() {
        let table = sample();
        assert_eq!(table.height(), 2);
        assert_eq!(table.cell(1, "B"), Some(&CellValue::Absent));
    }

    #[test]
    fn from_rows_rejects_wide_rows() {
        let err = Table::from_rows(
            vec!["A".into()],
            vec![vec![CellValue::Number(1.0), CellValue::Number(2.0)]],
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::RowWidth { row: 0, .. }));
    }

    #[test]
    fn push_column_enforces_equal_length() {
        let err = sample()
            .push_column(Column::new("C", vec![CellValue::Absent]))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::ColumnLength {
                column: "C".into(),
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn filter_and_take_keep_columns_aligned() {
        let table = sample().filter_rows(&[false, true]);
        assert_eq!(table.height(), 1);
        assert_eq!(table.cell(0, "A"), Some(&CellValue::text("y")));

        let repeated = sample().take_rows(&[0, 0]);
        assert_eq!(repeated.height(), 2);
        assert_eq!(
            repeated.values("B").unwrap(),
            &[CellValue::Number(1.0), CellValue::Number(1.0)]
        );
    }

    #[test]
    fn select_reports_missing_column() {
        let err = sample().select(&["A", "Z"]).unwrap_err();
        assert_eq!(
            err,
            ModelError::ColumnNotFound {
                column: "Z".into()
            }
        );
    }
}
