//! Required-column presence checks.

use std::collections::BTreeSet;

use cdd_model::Table;

use crate::error::ValidationError;

/// Names in `required` that `table` lacks, in `required` order, without repeats.
pub fn missing_columns(table: &Table, required: &[&str]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    required
        .iter()
        .filter(|name| !table.has_column(name))
        .filter(|name| seen.insert(**name))
        .map(|name| (*name).to_string())
        .collect()
}

/// Outcome of a required-column check against one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    /// Human label for the input, e.g. `Input file 1`.
    pub source: String,
    pub missing: Vec<String>,
}

impl SchemaReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError::MissingRequiredColumns {
            source_label: self.source,
            columns: self.missing,
        }
    }
}

/// Checks `table` against `required` and labels the result with `source`.
pub fn check_required(source: impl Into<String>, table: &Table, required: &[&str]) -> SchemaReport {
    SchemaReport {
        source: source.into(),
        missing: missing_columns(table, required),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdd_model::{CellValue, Column};

    fn table(names: &[&str]) -> Table {
        let columns = names
            .iter()
            .map(|name| Column::new(*name, vec![CellValue::Absent]))
            .collect();
        Table::from_columns(columns).unwrap()
    }

    #[test]
    fn missing_preserves_order_and_dedups() {
        let table = table(&["Compound", "Batch"]);
        let missing = missing_columns(&table, &["Species", "Compound", "%Recovery", "Species"]);
        assert_eq!(missing, vec!["Species", "%Recovery"]);
    }

    #[test]
    fn complete_report_has_no_gaps() {
        let report = check_required("protein binding", &table(&["Compound"]), &["Compound"]);
        assert!(report.is_complete());
    }

    #[test]
    fn names_are_case_sensitive() {
        let missing = missing_columns(&table(&["compound"]), &["Compound"]);
        assert_eq!(missing, vec!["Compound"]);
    }
}
