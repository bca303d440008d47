use cdd_ingest::HeaderLayout;
use cdd_transform::CleanRules;

use super::config::{AssayConfig, BATCH_COLUMN};

pub(super) const PAPP_AB_MEAN: &str = "Papp, A-B (x10-6 cm/s) Mean";
pub(super) const PAPP_BA_MEAN: &str = "Papp, B-A (x10-6 cm/s) Mean";
pub(super) const EFFLUX_RATIO: &str = "Ratio\nB-A/A-B";
const RECOVERY: &str = "Recovery (%)";

pub(super) fn config() -> AssayConfig {
    AssayConfig::new(
        HeaderLayout::double(" "),
        &[
            "Compound",
            BATCH_COLUMN,
            PAPP_AB_MEAN,
            PAPP_BA_MEAN,
            EFFLUX_RATIO,
            RECOVERY,
        ],
    )
    .with_rules(
        CleanRules::new()
            .essential(&["Compound", PAPP_AB_MEAN])
            .round(PAPP_AB_MEAN, 2)
            .round(PAPP_BA_MEAN, 2)
            .round(EFFLUX_RATIO, 2)
            .round(RECOVERY, 0),
    )
}
