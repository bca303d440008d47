use std::collections::BTreeSet;

use cdd_model::{CellValue, Table};
use cdd_transform::{
    JoinKey, Provenance, TransformError, derive_concat, fail_closed_join, outer_join,
};
use proptest::prelude::{prop_assert_eq, proptest};

fn plate_map(barcodes: &[&str]) -> Table {
    let rows = barcodes
        .iter()
        .enumerate()
        .map(|(idx, barcode)| {
            vec![
                CellValue::text("P1"),
                CellValue::text("A"),
                CellValue::Number((idx + 1) as f64),
                CellValue::infer(barcode),
            ]
        })
        .collect();
    Table::from_rows(
        vec![
            "Container Id".into(),
            "Row".into(),
            "Column".into(),
            "Barcode".into(),
        ],
        rows,
    )
    .unwrap()
}

fn compounds(codes: &[&str]) -> Table {
    let rows = codes
        .iter()
        .map(|code| vec![CellValue::infer(code), CellValue::text("CCO")])
        .collect();
    Table::from_rows(vec!["VIAL_QR_CODE".into(), "SMILES".into()], rows).unwrap()
}

fn key() -> JoinKey {
    JoinKey::new("Barcode", "VIAL_QR_CODE")
}

#[test]
fn matched_rows_survive_and_left_only_rows_drop() {
    let joined =
        fail_closed_join(&plate_map(&["X1", "X2"]), &compounds(&["X1"]), &key()).unwrap();
    assert_eq!(joined.height(), 1);
    assert_eq!(joined.cell(0, "Barcode"), Some(&CellValue::text("X1")));
    assert_eq!(joined.cell(0, "VIAL_QR_CODE"), Some(&CellValue::text("X1")));
}

#[test]
fn unmatched_right_key_aborts_with_key_in_message() {
    let err =
        fail_closed_join(&plate_map(&["X1"]), &compounds(&["X1", "Y9"]), &key()).unwrap_err();
    assert_eq!(
        err,
        TransformError::UnmatchedJoinKeys {
            left_key: "Barcode".into(),
            right_key: "VIAL_QR_CODE".into(),
            keys: vec!["Y9".into()],
        }
    );
    insta::assert_snapshot!(err.to_string(), @r"
    Mismatch found: The following 'VIAL_QR_CODES' in File 2 did not match any 'Barcode' in File 1:
    Y9
    Please double check these 'VIAL_QR_CODE' values.
    ");
}

#[test]
fn numeric_keys_match_across_cell_types() {
    let left = plate_map(&["12345"]);
    let right = Table::from_rows(
        vec!["VIAL_QR_CODE".into(), "SMILES".into()],
        vec![vec![CellValue::text("12345"), CellValue::text("C")]],
    )
    .unwrap();
    assert_eq!(fail_closed_join(&left, &right, &key()).unwrap().height(), 1);
}

#[test]
fn absent_keys_never_match() {
    let left = plate_map(&[""]);
    let right = compounds(&[""]);
    let joined = outer_join(&left, &right, &key()).unwrap();
    assert_eq!(
        joined.provenance,
        vec![Provenance::LeftOnly, Provenance::RightOnly]
    );
}

#[test]
fn duplicate_keys_fan_out_in_order() {
    let left = plate_map(&["K", "K"]);
    let right = Table::from_rows(
        vec!["VIAL_QR_CODE".into(), "SMILES".into()],
        vec![
            vec![CellValue::text("K"), CellValue::text("C1")],
            vec![CellValue::text("K"), CellValue::text("C2")],
        ],
    )
    .unwrap();
    let joined = fail_closed_join(&left, &right, &key()).unwrap();
    let smiles: Vec<String> = joined
        .values("SMILES")
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    let columns: Vec<String> = joined
        .values("Column")
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(smiles, vec!["C1", "C2", "C1", "C2"]);
    assert_eq!(columns, vec!["1", "1", "2", "2"]);
}

#[test]
fn colliding_columns_get_suffixes() {
    let left = Table::from_rows(
        vec!["id".into(), "note".into()],
        vec![vec![CellValue::text("a"), CellValue::text("left")]],
    )
    .unwrap();
    let right = Table::from_rows(
        vec!["id".into(), "note".into()],
        vec![
            vec![CellValue::text("a"), CellValue::text("right")],
            vec![CellValue::text("b"), CellValue::text("orphan")],
        ],
    )
    .unwrap();
    let joined = outer_join(&left, &right, &JoinKey::new("id", "id")).unwrap();

    assert_eq!(joined.table.column_names(), vec!["id", "note_x", "note_y"]);
    assert_eq!(joined.table.cell(1, "id"), Some(&CellValue::text("b")));
    assert_eq!(joined.table.cell(1, "note_x"), Some(&CellValue::Absent));
    assert_eq!(joined.count(Provenance::Matched), 1);
}

#[test]
fn derive_concat_builds_plate_well() {
    let table = derive_concat(plate_map(&["X1"]), "PLATE_WELL", &["Row", "Column"]).unwrap();
    assert_eq!(table.cell(0, "PLATE_WELL"), Some(&CellValue::text("A1")));
}

proptest! {
    #[test]
    fn unmatched_keys_are_exactly_the_orphans(
        left in proptest::collection::vec(0u32..20, 0..12),
        right in proptest::collection::vec(0u32..20, 1..12),
    ) {
        let left_codes: Vec<String> = left.iter().map(|n| format!("V{n}")).collect();
        let right_codes: Vec<String> = right.iter().map(|n| format!("V{n}")).collect();
        let left_refs: Vec<&str> = left_codes.iter().map(String::as_str).collect();
        let right_refs: Vec<&str> = right_codes.iter().map(String::as_str).collect();

        let expected: BTreeSet<&str> = right_refs
            .iter()
            .copied()
            .filter(|code| !left_refs.contains(code))
            .collect();

        match fail_closed_join(&plate_map(&left_refs), &compounds(&right_refs), &key()) {
            Ok(_) => prop_assert_eq!(expected.len(), 0),
            Err(TransformError::UnmatchedJoinKeys { keys, .. }) => {
                let reported: BTreeSet<&str> = keys.iter().map(String::as_str).collect();
                prop_assert_eq!(reported.len(), keys.len());
                prop_assert_eq!(reported, expected);
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
