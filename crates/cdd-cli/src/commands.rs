use std::path::Path;

use anyhow::{Context, Result};
use cdd_core::{AssayKind, AssayOutcome, NoopRenderer, reformat_assay, reformat_molecules};
use cdd_model::RunContext;
use comfy_table::Table;
use tracing::{error, info_span};

use cdd_cli::config::SessionConfig;
use cdd_cli::report::{RunEntry, RunReport, apply_table_style};

use crate::cli::{AssayArgs, MoleculesArgs, RunArgs};

const MOLECULES_FLOW: &str = "Molecules";

pub fn run_assays_list() {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Assay", "Output prefix"]);
    apply_table_style(&mut table);
    for kind in AssayKind::ALL {
        table.add_row(vec![kind.code(), kind.label(), kind.output_prefix()]);
    }
    println!("{table}");
}

pub fn run_molecules(args: &MoleculesArgs, base: RunContext) -> RunReport {
    let ctx = base
        .with_project(args.project.as_str())
        .with_chemist(args.chemist.as_str());
    let mut report = RunReport::default();
    report.push(molecules_entry(&args.plate_map, &args.compounds, &ctx));
    report
}

pub fn run_assay(args: &AssayArgs, base: RunContext) -> RunReport {
    let ctx = base.with_batch(args.batch.as_str());
    let mut report = RunReport::default();
    report.push(assay_entry(args.kind.into(), &args.path, &ctx));
    report
}

/// Runs every configured flow, continuing past individual failures.
pub fn run_session(args: &RunArgs, base: RunContext, output_dir_flag: bool) -> Result<RunReport> {
    let config = SessionConfig::load(&args.config)
        .with_context(|| format!("load session {}", args.config.display()))?;
    let span = info_span!("session", config = %args.config.display());
    let _guard = span.enter();

    let mut ctx = base;
    ctx.project = args.project.clone().or(config.session.project);
    ctx.chemist = args.chemist.clone().or(config.session.chemist);
    ctx.batch = args.batch.clone().or(config.session.batch);
    if !output_dir_flag && let Some(dir) = config.session.output_dir {
        ctx.output_dir = dir;
    }

    let mut report = RunReport::default();
    if let Some(molecules) = &config.molecules {
        report.push(molecules_entry(&molecules.plate_map, &molecules.compounds, &ctx));
    }
    for (kind, path) in config.assays.entries() {
        report.push(assay_entry(kind, path, &ctx));
    }
    Ok(report)
}

fn molecules_entry(plate_map: &Path, compounds: &Path, ctx: &RunContext) -> RunEntry {
    match reformat_molecules(plate_map, compounds, ctx, &NoopRenderer) {
        Ok(outcome) => RunEntry::written(MOLECULES_FLOW, outcome.path, outcome.table.height()),
        Err(err) => {
            error!("{err}");
            RunEntry::failed(MOLECULES_FLOW, err)
        }
    }
}

fn assay_entry(kind: AssayKind, path: &Path, ctx: &RunContext) -> RunEntry {
    match reformat_assay(kind, path, ctx) {
        Ok(AssayOutcome::Written { path, rows }) => RunEntry::written(kind.label(), path, rows),
        Ok(AssayOutcome::Skipped(reason)) => RunEntry::skipped(kind.label(), reason),
        Err(err) => {
            error!(assay = kind.code(), "{err}");
            RunEntry::failed(kind.label(), err)
        }
    }
}
