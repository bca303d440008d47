//! `Table` to `DataFrame` conversion.

use cdd_model::{CellValue, Table};
use polars::prelude::{Column, DataFrame};

use crate::error::Result;

/// Converts `table` into a `DataFrame` with one string column per table column.
pub fn to_dataframe(table: &Table) -> Result<DataFrame> {
    let columns = table
        .columns()
        .iter()
        .map(|column| {
            let values: Vec<Option<String>> = column.values.iter().map(cell_text).collect();
            Column::new(column.name.as_str().into(), values)
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// First `rows` rows rendered as a text table.
pub fn preview(table: &Table, rows: usize) -> Result<String> {
    let df = to_dataframe(table)?;
    Ok(format!("{}", df.head(Some(rows))))
}

fn cell_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Absent => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdd_model::Column as TableColumn;

    #[test]
    fn absent_cells_become_nulls() {
        let table = Table::from_columns(vec![TableColumn::new(
            "CONC_mM",
            vec![CellValue::Number(10.0), CellValue::Absent],
        )])
        .unwrap();
        let df = to_dataframe(&table).unwrap();
        let column = df.column("CONC_mM").unwrap();
        assert_eq!(column.null_count(), 1);
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let table = Table::from_columns(vec![
            TableColumn::new("A", vec![CellValue::Absent]),
            TableColumn::new("A", vec![CellValue::Absent]),
        ])
        .unwrap();
        assert!(to_dataframe(&table).is_err());
    }

    #[test]
    fn preview_limits_rows() {
        let values = (0..10).map(|n| CellValue::Number(f64::from(n))).collect();
        let table = Table::from_columns(vec![TableColumn::new("Compound", values)]).unwrap();
        let text = preview(&table, 3).unwrap();
        assert!(text.contains("shape: (3, 1)"));
    }
}
