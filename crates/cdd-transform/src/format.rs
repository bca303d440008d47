//! Projection into a fixed upload layout.

use cdd_model::{CellValue, Column, Table};

use crate::error::{Result, TransformError};

/// Declarative output shape.
///
/// Applied as select, rename, inject constants, then reorder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputSpec {
    /// Source columns to keep; empty keeps every column.
    pub select: Vec<String>,
    /// `(from, to)` renames applied after selection.
    pub rename: Vec<(String, String)>,
    /// Columns repeating one value on every row.
    pub constants: Vec<(String, CellValue)>,
    /// Final column order; empty keeps the current order.
    pub order: Vec<String>,
}

impl OutputSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.select = columns.iter().map(|c| (*c).to_string()).collect();
        self
    }

    #[must_use]
    pub fn rename(mut self, from: &str, to: &str) -> Self {
        self.rename.push((from.to_string(), to.to_string()));
        self
    }

    #[must_use]
    pub fn constant(mut self, name: &str, value: impl Into<CellValue>) -> Self {
        self.constants.push((name.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn order(mut self, columns: &[&str]) -> Self {
        self.order = columns.iter().map(|c| (*c).to_string()).collect();
        self
    }
}

/// Shapes `table` according to `spec`.
pub fn format_output(table: Table, spec: &OutputSpec) -> Result<Table> {
    let mut table = if spec.select.is_empty() {
        table
    } else {
        let names: Vec<&str> = spec.select.iter().map(String::as_str).collect();
        select_columns(&table, &names)?
    };

    for (from, to) in &spec.rename {
        table = table.rename(from, to).map_err(|_| TransformError::missing(from))?;
    }

    let height = table.height();
    for (name, value) in &spec.constants {
        table = table.with_column(name, vec![value.clone(); height])?;
    }

    if spec.order.is_empty() {
        return Ok(table);
    }
    let names: Vec<&str> = spec.order.iter().map(String::as_str).collect();
    select_columns(&table, &names)
}

fn select_columns(table: &Table, names: &[&str]) -> Result<Table> {
    let mut out = Table::with_height(table.height());
    for name in names {
        let column = table.column(name).ok_or_else(|| TransformError::missing(name))?;
        out = out.push_column(Column::new(*name, column.values.clone()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged() -> Table {
        Table::from_rows(
            vec!["Container Id".into(), "SMILES".into(), "Scan Time".into()],
            vec![vec![
                CellValue::text("P1"),
                CellValue::text("CCO"),
                CellValue::text("09:00"),
            ]],
        )
        .unwrap()
    }

    #[test]
    fn applies_select_rename_constants_and_order() {
        let spec = OutputSpec::new()
            .select(&["Container Id", "SMILES"])
            .rename("Container Id", "PLATE_BARCODE")
            .rename("SMILES", "CDD_SMILES")
            .constant("Project", "Covalent")
            .order(&["Project", "PLATE_BARCODE", "CDD_SMILES"]);
        let table = format_output(merged(), &spec).unwrap();

        assert_eq!(table.column_names(), vec!["Project", "PLATE_BARCODE", "CDD_SMILES"]);
        assert_eq!(table.cell(0, "Project"), Some(&CellValue::text("Covalent")));
    }

    #[test]
    fn unknown_order_column_is_reported() {
        let spec = OutputSpec::new().order(&["Batch"]);
        assert_eq!(
            format_output(merged(), &spec).unwrap_err(),
            TransformError::ColumnNotFound {
                column: "Batch".into()
            }
        );
    }

    #[test]
    fn constants_on_empty_table_add_empty_column() {
        let empty = Table::from_rows(vec!["Compound".into()], Vec::new()).unwrap();
        let table = format_output(empty, &OutputSpec::new().constant("Batch", "B7")).unwrap();
        assert_eq!(table.column_names(), vec!["Compound", "Batch"]);
        assert!(table.is_empty());
    }
}
