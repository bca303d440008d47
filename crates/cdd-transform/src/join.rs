//! Key-based joins between two tables.

use std::collections::HashMap;

use cdd_model::{CellValue, Column, Table};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Left and right key column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinKey {
    pub left: String,
    pub right: String,
}

impl JoinKey {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    fn shared(&self) -> bool {
        self.left == self.right
    }
}

/// Which side(s) produced an output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    LeftOnly,
    RightOnly,
    Matched,
}

/// Outer-join result with one provenance tag per row.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedTable {
    pub table: Table,
    pub provenance: Vec<Provenance>,
}

impl JoinedTable {
    /// Keeps only rows tagged `wanted`.
    pub fn only(self, wanted: Provenance) -> Table {
        let keep: Vec<bool> = self.provenance.iter().map(|p| *p == wanted).collect();
        self.table.filter_rows(&keep)
    }

    pub fn count(&self, wanted: Provenance) -> usize {
        self.provenance.iter().filter(|p| **p == wanted).count()
    }
}

/// Full outer join of `left` and `right` on `key`.
///
/// Keys compare by [`CellValue::key_string`]; `Absent` keys never match.
/// Rows follow left order (each left row followed by its right partners in
/// right order, or alone when it has none), then right-only rows in right
/// order. Non-key columns present on both sides get `_x` / `_y` suffixes.
pub fn outer_join(left: &Table, right: &Table, key: &JoinKey) -> Result<JoinedTable> {
    let (pairs, provenance) = plan(left, right, key)?;
    let table = assemble(left, right, key, &pairs)?;
    Ok(JoinedTable { table, provenance })
}

/// Inner join that fails when any right-side key has no left partner.
///
/// Left-only rows are dropped silently. The error lists every unmatched
/// right-side key once, in first-seen order.
pub fn fail_closed_join(left: &Table, right: &Table, key: &JoinKey) -> Result<Table> {
    let (pairs, provenance) = plan(left, right, key)?;
    let right_keys = right.values(&key.right)?;

    let mut unmatched: Vec<String> = Vec::new();
    for (pair, tag) in pairs.iter().zip(&provenance) {
        if let ((None, Some(right_idx)), Provenance::RightOnly) = (pair, tag) {
            let label = right_keys[*right_idx]
                .key_string()
                .unwrap_or_else(|| "<blank>".to_string());
            if !unmatched.contains(&label) {
                unmatched.push(label);
            }
        }
    }
    if !unmatched.is_empty() {
        return Err(TransformError::UnmatchedJoinKeys {
            left_key: key.left.clone(),
            right_key: key.right.clone(),
            keys: unmatched,
        });
    }

    let matched: Vec<_> = pairs
        .into_iter()
        .zip(&provenance)
        .filter(|(_, tag)| **tag == Provenance::Matched)
        .map(|(pair, _)| pair)
        .collect();
    debug!(
        matched = matched.len(),
        dropped_left = provenance.len() - matched.len(),
        "joined {} on {}",
        key.left,
        key.right
    );
    assemble(left, right, key, &matched)
}

/// Appends `new_column` as the concatenated text of `columns`.
///
/// Integral numbers drop their fraction (`A` + `1.0` → `A1`); a row with an
/// `Absent` part yields `Absent`.
pub fn derive_concat(table: Table, new_column: &str, columns: &[&str]) -> Result<Table> {
    let values = {
        let sources = columns
            .iter()
            .map(|name| table.values(name).map_err(|_| TransformError::missing(name)))
            .collect::<Result<Vec<_>>>()?;
        (0..table.height())
            .map(|row| {
                let mut text = String::new();
                for source in &sources {
                    match &source[row] {
                        CellValue::Absent => return CellValue::Absent,
                        cell => text.push_str(&cell.to_string()),
                    }
                }
                CellValue::Text(text)
            })
            .collect()
    };
    Ok(table.with_column(new_column, values)?)
}

fn key_strings(table: &Table, column: &str) -> Result<Vec<Option<String>>> {
    let values = table
        .values(column)
        .map_err(|_| TransformError::missing(column))?;
    Ok(values.iter().map(CellValue::key_string).collect())
}

type RowPair = (Option<usize>, Option<usize>);

fn plan(left: &Table, right: &Table, key: &JoinKey) -> Result<(Vec<RowPair>, Vec<Provenance>)> {
    let left_keys = key_strings(left, &key.left)?;
    let right_keys = key_strings(right, &key.right)?;

    let mut right_index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, value) in right_keys.iter().enumerate() {
        if let Some(value) = value {
            right_index.entry(value.as_str()).or_default().push(idx);
        }
    }

    let mut pairs = Vec::new();
    let mut provenance = Vec::new();
    let mut right_matched = vec![false; right.height()];
    for (left_idx, value) in left_keys.iter().enumerate() {
        let partners = value
            .as_deref()
            .and_then(|v| right_index.get(v))
            .map(Vec::as_slice)
            .unwrap_or_default();
        if partners.is_empty() {
            pairs.push((Some(left_idx), None));
            provenance.push(Provenance::LeftOnly);
            continue;
        }
        for &right_idx in partners {
            right_matched[right_idx] = true;
            pairs.push((Some(left_idx), Some(right_idx)));
            provenance.push(Provenance::Matched);
        }
    }
    for (right_idx, matched) in right_matched.iter().enumerate() {
        if !matched {
            pairs.push((None, Some(right_idx)));
            provenance.push(Provenance::RightOnly);
        }
    }
    Ok((pairs, provenance))
}

fn assemble(
    left: &Table,
    right: &Table,
    key: &JoinKey,
    pairs: &[RowPair],
) -> Result<Table> {
    let shared_key = key.shared();
    let collides = |name: &str| {
        let is_key = shared_key && name == key.left;
        !is_key && left.has_column(name) && right.has_column(name)
    };

    let mut columns = Vec::with_capacity(left.width() + right.width());
    for column in left.columns() {
        let name = if collides(&column.name) {
            format!("{}_x", column.name)
        } else {
            column.name.clone()
        };
        let values = if shared_key && column.name == key.left {
            // Right-only rows take the key from the right side.
            let right_values = right.values(&key.right)?;
            pairs
                .iter()
                .map(|(l, r)| match (l, r) {
                    (Some(l), _) => column.values[*l].clone(),
                    (None, Some(r)) => right_values[*r].clone(),
                    (None, None) => CellValue::Absent,
                })
                .collect()
        } else {
            gather(&column.values, pairs.iter().map(|(l, _)| *l))
        };
        columns.push(Column::new(name, values));
    }
    for column in right.columns() {
        if shared_key && column.name == key.right {
            continue;
        }
        let name = if collides(&column.name) {
            format!("{}_y", column.name)
        } else {
            column.name.clone()
        };
        columns.push(Column::new(
            name,
            gather(&column.values, pairs.iter().map(|(_, r)| *r)),
        ));
    }

    let mut table = Table::with_height(pairs.len());
    for column in columns {
        table = table.push_column(column)?;
    }
    Ok(table)
}

fn gather(values: &[CellValue], indices: impl Iterator<Item = Option<usize>>) -> Vec<CellValue> {
    indices
        .map(|idx| idx.and_then(|i| values.get(i)).cloned().unwrap_or_default())
        .collect()
}
