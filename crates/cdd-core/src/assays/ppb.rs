use cdd_ingest::HeaderLayout;
use cdd_transform::CleanRules;

use super::config::{AssayConfig, BATCH_COLUMN};

const COMPOUND: &str = "Compound";
const CONCENTRATION: &str = "Concentration (uM)";
const BOUND_AVERAGE: &str = "% Bound Average";
const RECOVERY: &str = "%Recovery";

pub(super) fn config() -> AssayConfig {
    AssayConfig::new(
        HeaderLayout::single(),
        &[COMPOUND, CONCENTRATION, BATCH_COLUMN, BOUND_AVERAGE, RECOVERY, "Species"],
    )
    .with_rules(
        CleanRules::new()
            .essential(&[COMPOUND, BOUND_AVERAGE])
            .round(CONCENTRATION, 2)
            .round(BOUND_AVERAGE, 2)
            .round(RECOVERY, 2),
    )
}
