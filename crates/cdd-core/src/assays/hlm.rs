//! Liver microsome stability.
//!
//! The cell at `L1` holds a label (e.g. the species) that becomes an extra,
//! empty output column. No rows are filtered.

use cdd_ingest::{HeaderLayout, MetadataCell, RawGrid};
use cdd_transform::CleanRules;

use super::config::{AssayConfig, BATCH_COLUMN};
use crate::error::Result;

const SPECIAL_HEADER_CELL: (usize, usize) = (0, 11);

const HALF_LIFE_MEAN: &str = "t1/2 (min)_Mean";
const HALF_LIFE_SE: &str = "t1/2 (min)_SE";
const CLINT_MEAN: &str = "CLint (µL/min/mg protein)_Mean";
const CLINT_SE: &str = "CLint (µL/min/mg protein)_SE";

pub(super) fn config(grid: &RawGrid) -> Result<AssayConfig> {
    let (row, col) = SPECIAL_HEADER_CELL;
    let special_header = grid.cell_text(row, col)?;
    let layout = HeaderLayout::double("_").with_metadata(MetadataCell::LabelOnly { row, col });

    Ok(AssayConfig::new(
        layout,
        &[
            "Compound",
            BATCH_COLUMN,
            HALF_LIFE_MEAN,
            HALF_LIFE_SE,
            CLINT_MEAN,
            CLINT_SE,
            &special_header,
        ],
    )
    .with_rules(
        CleanRules::new()
            .round(HALF_LIFE_MEAN, 1)
            .round(HALF_LIFE_SE, 1)
            .round(CLINT_MEAN, 1)
            .round(CLINT_SE, 3),
    ))
}
