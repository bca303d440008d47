use crate::cell::CellValue;

/// Propagates the last non-blank value forward across blank cells.
///
/// Leading blanks stay blank. Used for ragged header rows (left to right) and
/// for grouped data columns (top to bottom).
///
/// # Examples
///
/// ```
/// use cdd_model::{CellValue, forward_fill};
///
/// let filled = forward_fill(&[
///     CellValue::Absent,
///     CellValue::text("A"),
///     CellValue::Absent,
///     CellValue::text("B"),
/// ]);
/// assert_eq!(
///     filled,
///     vec![
///         CellValue::Absent,
///         CellValue::text("A"),
///         CellValue::text("A"),
///         CellValue::text("B"),
///     ]
/// );
/// ```
pub fn forward_fill(values: &[CellValue]) -> Vec<CellValue> {
    let mut last: Option<&CellValue> = None;
    values
        .iter()
        .map(|value| {
            if value.is_blank() {
                last.cloned().unwrap_or_else(|| value.clone())
            } else {
                last = Some(value);
                value.clone()
            }
        })
        .collect()
}
