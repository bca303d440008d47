//! Kinetic solubility: column names embed the buffer label from `C2`.

use cdd_ingest::{HeaderLayout, RawGrid};
use cdd_transform::CleanRules;

use super::config::{AssayConfig, BATCH_COLUMN};
use crate::error::Result;

const BUFFER_CELL: (usize, usize) = (1, 2);
const HEADER_ROWS: usize = 2;

pub(super) fn config(grid: &RawGrid) -> Result<AssayConfig> {
    let buffer = grid.cell_text(BUFFER_CELL.0, BUFFER_CELL.1)?;
    let value = format!("KSOL (uM) {buffer} Value");
    let mean = format!("KSOL (uM) {buffer} Mean");

    let names = vec![
        "Compound".to_string(),
        "Final [DMSO]".to_string(),
        value,
        mean.clone(),
    ];
    let layout =
        HeaderLayout::fixed(names, HEADER_ROWS).with_fill_down(&["Compound", "Final [DMSO]"]);

    Ok(
        AssayConfig::new(layout, &["Compound", "Final [DMSO]", &mean, BATCH_COLUMN]).with_rules(
            CleanRules::new()
                .essential(&["Compound", &mean])
                .round(&mean, 1),
        ),
    )
}
