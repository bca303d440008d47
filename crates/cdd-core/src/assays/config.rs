use cdd_ingest::HeaderLayout;
use cdd_transform::CleanRules;

/// Constant column carrying the run's batch id.
pub const BATCH_COLUMN: &str = "Batch";

/// Data describing one assay reformat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssayConfig {
    pub layout: HeaderLayout,
    /// Required columns in output order, `Batch` included.
    pub columns: Vec<String>,
    pub rules: CleanRules,
}

impl AssayConfig {
    pub fn new(layout: HeaderLayout, columns: &[&str]) -> Self {
        Self {
            layout,
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rules: CleanRules::default(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: CleanRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn column_refs(&self) -> Vec<&str> {
        self.columns.iter().map(String::as_str).collect()
    }
}
