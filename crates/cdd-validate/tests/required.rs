use cdd_model::{CellValue, Table};
use cdd_validate::{Gate, ValidationPolicy, check_required};

fn plate_map() -> Table {
    Table::from_rows(
        vec!["Container Id".into(), "Row".into(), "Column".into()],
        vec![vec![
            CellValue::text("P1"),
            CellValue::text("A"),
            CellValue::Number(1.0),
        ]],
    )
    .unwrap()
}

#[test]
fn abort_policy_lists_all_gaps() {
    let report = check_required(
        "Input file 1",
        &plate_map(),
        &["Container Id", "Orientation Barcode", "Row", "Column", "Barcode", "Scan Time"],
    );
    let err = ValidationPolicy::Abort.enforce(report).unwrap_err();
    let message = err.to_string();
    for column in ["Orientation Barcode", "Barcode", "Scan Time"] {
        assert!(message.contains(&format!("'{column}'")), "{message}");
    }
    assert!(!message.contains("'Row'"));
}

#[test]
fn skip_policy_keeps_running() {
    let report = check_required("caco-2", &plate_map(), &["Compound"]);
    match ValidationPolicy::WarnAndSkip.enforce(report).unwrap() {
        Gate::Skip(report) => assert_eq!(report.missing, vec!["Compound"]),
        Gate::Proceed => panic!("expected skip"),
    }
}
