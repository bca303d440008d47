//! Per-run outcome records and the summary table.

use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// How a single flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Written,
    Skipped,
    Failed,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEntry {
    pub flow: String,
    pub status: RunStatus,
    pub rows: Option<usize>,
    pub output: Option<PathBuf>,
    /// Skip reason or error message.
    pub detail: Option<String>,
}

impl RunEntry {
    pub fn written(flow: impl Into<String>, output: PathBuf, rows: usize) -> Self {
        Self {
            flow: flow.into(),
            status: RunStatus::Written,
            rows: Some(rows),
            output: Some(output),
            detail: None,
        }
    }

    pub fn skipped(flow: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            flow: flow.into(),
            status: RunStatus::Skipped,
            rows: None,
            output: None,
            detail: Some(reason.to_string()),
        }
    }

    pub fn failed(flow: impl Into<String>, error: impl ToString) -> Self {
        Self {
            flow: flow.into(),
            status: RunStatus::Failed,
            rows: None,
            output: None,
            detail: Some(error.to_string()),
        }
    }
}

/// Everything one CLI invocation did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub entries: Vec<RunEntry>,
}

impl RunReport {
    pub fn push(&mut self, entry: RunEntry) {
        self.entries.push(entry);
    }

    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|e| e.status == RunStatus::Failed)
    }

    pub fn count(&self, status: RunStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }
}

/// Builds the summary table printed after a run.
pub fn summary_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Flow"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Output / Detail"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for entry in &report.entries {
        let detail = match (&entry.output, &entry.detail) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(detail)) => detail.clone(),
            (None, None) => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(&entry.flow),
            status_cell(entry.status),
            entry
                .rows
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(detail),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn status_cell(status: RunStatus) -> Cell {
    let color = match status {
        RunStatus::Written => Color::Green,
        RunStatus::Skipped => Color::Yellow,
        RunStatus::Failed => Color::Red,
    };
    Cell::new(status.label())
        .fg(color)
        .add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
