use cdd_cli::report::{RunReport, RunStatus, summary_table};

pub fn print_summary(report: &RunReport) {
    println!("{}", summary_table(report));
    println!(
        "{} written, {} skipped, {} failed",
        report.count(RunStatus::Written),
        report.count(RunStatus::Skipped),
        report.count(RunStatus::Failed)
    );
    let failures: Vec<_> = report
        .entries
        .iter()
        .filter(|e| e.status == RunStatus::Failed)
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for entry in failures {
            if let Some(detail) = &entry.detail {
                eprintln!("- {}: {detail}", entry.flow);
            }
        }
    }
}
