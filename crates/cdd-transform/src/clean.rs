//! Row-level cleaning: essential-value filtering and numeric rounding.

use cdd_model::{CellValue, Table};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Per-assay cleaning rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanRules {
    /// Rows with an `Absent` cell in any of these columns are dropped.
    pub essential: Vec<String>,
    /// `(column, decimals)` pairs applied to `Number` cells.
    pub rounding: Vec<(String, u32)>,
}

impl CleanRules {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn essential(mut self, columns: &[&str]) -> Self {
        self.essential = columns.iter().map(|c| (*c).to_string()).collect();
        self
    }

    #[must_use]
    pub fn round(mut self, column: &str, decimals: u32) -> Self {
        self.rounding.push((column.to_string(), decimals));
        self
    }
}

/// Applies `rules` to `table`.
pub fn clean(table: Table, rules: &CleanRules) -> Result<Table> {
    let mut table = table;
    if !rules.essential.is_empty() {
        let before = table.height();
        let mut keep = vec![true; before];
        for column in &rules.essential {
            let values = table
                .values(column)
                .map_err(|_| TransformError::missing(column))?;
            for (flag, value) in keep.iter_mut().zip(values) {
                *flag &= !value.is_absent();
            }
        }
        table = table.filter_rows(&keep);
        debug!(
            dropped = before - table.height(),
            essential = ?rules.essential,
            "dropped rows missing essential values"
        );
    }

    for (column, decimals) in &rules.rounding {
        if !table.has_column(column) {
            return Err(TransformError::missing(column));
        }
        table = table.map_column(column, |cell| match cell {
            CellValue::Number(value) => CellValue::Number(round_value(*value, *decimals)),
            other => other.clone(),
        })?;
    }
    Ok(table)
}

/// Rounds to `decimals` places, ties to even.
///
/// # Examples
///
/// ```
/// use cdd_transform::round_value;
///
/// assert_eq!(round_value(12.345, 1), 12.3);
/// assert_eq!(round_value(-0.25, 1), -0.2);
/// assert_eq!(round_value(97.5, 0), 98.0);
/// assert_eq!(round_value(92.5, 0), 92.0);
/// ```
pub fn round_value(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round_ties_even() / factor;
    if rounded.is_finite() { rounded } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdd_model::Column;

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::new(
                "Compound",
                vec![
                    CellValue::text("CMP-1"),
                    CellValue::Absent,
                    CellValue::text("CMP-3"),
                ],
            ),
            Column::new(
                "% Bound Average",
                vec![
                    CellValue::Number(99.456),
                    CellValue::Number(50.0),
                    CellValue::text("<LOQ"),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn drops_rows_with_absent_essentials() {
        let rules = CleanRules::new().essential(&["Compound"]);
        let table = clean(sample(), &rules).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.cell(1, "Compound"), Some(&CellValue::text("CMP-3")));
    }

    #[test]
    fn rounds_numbers_and_keeps_text() {
        let rules = CleanRules::new().round("% Bound Average", 2);
        let table = clean(sample(), &rules).unwrap();
        assert_eq!(
            table.values("% Bound Average").unwrap(),
            &[
                CellValue::Number(99.46),
                CellValue::Number(50.0),
                CellValue::text("<LOQ")
            ]
        );
    }

    #[test]
    fn missing_rule_column_is_an_error() {
        let rules = CleanRules::new().round("%Recovery", 2);
        assert_eq!(
            clean(sample(), &rules).unwrap_err(),
            TransformError::ColumnNotFound {
                column: "%Recovery".into()
            }
        );
    }

    #[test]
    fn exact_ties_round_to_even() {
        assert_eq!(round_value(92.5, 0), 92.0);
        assert_eq!(round_value(93.5, 0), 94.0);
        assert_eq!(round_value(0.125, 2), 0.12);
        assert_eq!(round_value(0.25, 1), 0.2);
    }

    #[test]
    fn round_value_leaves_non_finite_alone() {
        assert!(round_value(f64::NAN, 2).is_nan());
        assert_eq!(round_value(f64::INFINITY, 2), f64::INFINITY);
    }
}
