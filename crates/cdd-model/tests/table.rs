//! Integration tests for table construction and cell inference.

use cdd_model::{CellValue, Column, Table, format_numeric};
use proptest::prelude::*;

#[test]
fn table_round_trips_row_major_cells() {
    let table = Table::from_rows(
        vec!["Compound".into(), "Value".into()],
        vec![
            vec![CellValue::infer("CMP-1"), CellValue::infer("12.5")],
            vec![CellValue::infer("CMP-2"), CellValue::infer("n/a")],
        ],
    )
    .unwrap();

    assert_eq!(table.column_names(), vec!["Compound", "Value"]);
    assert_eq!(
        table.row(1),
        vec![&CellValue::text("CMP-2"), &CellValue::text("n/a")]
    );
    assert_eq!(table.cell(0, "Value"), Some(&CellValue::Number(12.5)));
}

#[test]
fn with_column_replaces_existing_values() {
    let table = Table::from_columns(vec![Column::new("A", vec![CellValue::Number(1.0)])])
        .unwrap()
        .with_column("A", vec![CellValue::text("x")])
        .unwrap()
        .with_column("B", vec![CellValue::Absent])
        .unwrap();

    assert_eq!(table.width(), 2);
    assert_eq!(table.values("A").unwrap(), &[CellValue::text("x")]);
}

#[test]
fn duplicate_names_resolve_to_first_column() {
    let table = Table::from_rows(
        vec!["Mean".into(), "Mean".into()],
        vec![vec![CellValue::Number(1.0), CellValue::Number(2.0)]],
    )
    .unwrap();

    assert_eq!(table.cell(0, "Mean"), Some(&CellValue::Number(1.0)));
}

proptest! {
    #[test]
    fn integral_numbers_format_without_fraction(n in -1_000_000i64..1_000_000) {
        prop_assert_eq!(format_numeric(n as f64), n.to_string());
    }

    #[test]
    fn inferred_numbers_round_trip_through_display(v in -1.0e6f64..1.0e6) {
        let cell = CellValue::infer(&v.to_string());
        prop_assert_eq!(cell, CellValue::Number(v));
    }
}

#[test]
fn fill_down_repeats_group_labels() {
    let table = Table::from_rows(
        vec!["Compound".into(), "Value".into()],
        vec![
            vec![CellValue::text("CMP-1"), CellValue::Number(1.0)],
            vec![CellValue::Absent, CellValue::Number(2.0)],
            vec![CellValue::text("CMP-2"), CellValue::Number(3.0)],
            vec![CellValue::Absent, CellValue::Number(4.0)],
        ],
    )
    .unwrap()
    .fill_down("Compound")
    .unwrap();

    assert_eq!(
        table.values("Compound").unwrap(),
        &[
            CellValue::text("CMP-1"),
            CellValue::text("CMP-1"),
            CellValue::text("CMP-2"),
            CellValue::text("CMP-2"),
        ]
    );
}

proptest! {
    #[test]
    fn forward_fill_leaves_no_interior_blanks(mask in proptest::collection::vec(any::<bool>(), 1..32)) {
        let values: Vec<CellValue> = mask
            .iter()
            .enumerate()
            .map(|(idx, present)| {
                if *present {
                    CellValue::Number(idx as f64)
                } else {
                    CellValue::Absent
                }
            })
            .collect();
        let filled = cdd_model::forward_fill(&values);
        let first_present = mask.iter().position(|p| *p);
        for (idx, cell) in filled.iter().enumerate() {
            match first_present {
                Some(first) if idx >= first => prop_assert!(!cell.is_absent()),
                _ => prop_assert!(cell.is_absent()),
            }
        }
    }
}
