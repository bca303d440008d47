//! CLI argument definitions for the CDD reformatter.

use std::path::PathBuf;

use cdd_core::AssayKind;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use cdd_cli::config::DEFAULT_CONFIG_FILENAME;

#[derive(Parser)]
#[command(
    name = "cdd-reformat",
    version,
    about = "Reformat assay and compound spreadsheets for CDD upload",
    long_about = "Reformat laboratory instrument exports into CDD upload files.\n\n\
                  Merges plate maps with compound lists and reshapes protein binding,\n\
                  kinetic solubility, microsome stability, Caco-2 and MDCK results."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings, -qq for errors).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory for output files (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Run date stamped into output file names, as YYYYMMDD (default: today).
    #[arg(long = "date", value_name = "YYYYMMDD", value_parser = parse_run_date, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge a plate map with a compound list into the molecule upload file.
    Molecules(MoleculesArgs),

    /// Reformat one assay export.
    Assay(AssayArgs),

    /// Run every flow configured in a session file.
    Run(RunArgs),

    /// List supported assays and their output prefixes.
    Assays,
}

#[derive(Parser)]
pub struct MoleculesArgs {
    /// Plate map scan (.csv).
    #[arg(value_name = "PLATE_MAP")]
    pub plate_map: PathBuf,

    /// Compound list (.csv or .xlsx).
    #[arg(value_name = "COMPOUNDS")]
    pub compounds: PathBuf,

    #[arg(long)]
    pub project: String,

    #[arg(long)]
    pub chemist: String,
}

#[derive(Parser)]
pub struct AssayArgs {
    #[arg(value_enum, value_name = "KIND")]
    pub kind: AssayKindArg,

    /// Instrument export (.xlsx or .csv).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Batch id written into every output row.
    #[arg(long)]
    pub batch: String,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Session file.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Override the session project.
    #[arg(long)]
    pub project: Option<String>,

    /// Override the session chemist.
    #[arg(long)]
    pub chemist: Option<String>,

    /// Override the session batch id.
    #[arg(long)]
    pub batch: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AssayKindArg {
    Ppb,
    Ksol,
    Hlm,
    Caco2,
    Mdck,
}

impl From<AssayKindArg> for AssayKind {
    fn from(arg: AssayKindArg) -> Self {
        match arg {
            AssayKindArg::Ppb => AssayKind::ProteinBinding,
            AssayKindArg::Ksol => AssayKind::KineticSolubility,
            AssayKindArg::Hlm => AssayKind::MicrosomeStability,
            AssayKindArg::Caco2 => AssayKind::Caco2,
            AssayKindArg::Mdck => AssayKind::Mdck,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_run_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map_err(|e| format!("expected a date like 20240603: {e}"))
}
