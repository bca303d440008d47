//! MDCK permeability: header starts on row 2; `A1` names the cell line.

use cdd_ingest::{HeaderLayout, MetadataCell};
use cdd_transform::CleanRules;

use super::caco2::{EFFLUX_RATIO, PAPP_AB_MEAN, PAPP_BA_MEAN};
use super::config::{AssayConfig, BATCH_COLUMN};

const RECOVER_RATE: &str = "Recover Rate (%)";
const CELL_LINE: &str = "Cell Line";

pub(super) fn config() -> AssayConfig {
    let layout = HeaderLayout::double(" ")
        .starting_at(1)
        .with_metadata(MetadataCell::FirstRowValue {
            row: 0,
            col: 0,
            label: CELL_LINE.to_string(),
        });

    AssayConfig::new(
        layout,
        &[
            "Compound",
            BATCH_COLUMN,
            PAPP_AB_MEAN,
            PAPP_BA_MEAN,
            EFFLUX_RATIO,
            RECOVER_RATE,
            CELL_LINE,
        ],
    )
    .with_rules(
        CleanRules::new()
            .essential(&["Compound", PAPP_AB_MEAN, PAPP_BA_MEAN])
            .round(PAPP_AB_MEAN, 2)
            .round(PAPP_BA_MEAN, 2)
            .round(EFFLUX_RATIO, 2)
            .round(RECOVER_RATE, 0),
    )
}
