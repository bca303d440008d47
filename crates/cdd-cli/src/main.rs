//! CDD reformatter CLI.

use std::io::{self, IsTerminal};

use cdd_cli::logging::{LogConfig, LogFormat, init_logging};
use cdd_model::RunContext;
use chrono::Local;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_assay, run_assays_list, run_molecules, run_session};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let base = run_context_from_cli(&cli);
    let report = match &cli.command {
        Command::Molecules(args) => run_molecules(args, base),
        Command::Assay(args) => run_assay(args, base),
        Command::Run(args) => match run_session(args, base, cli.output_dir.is_some()) {
            Ok(report) => report,
            Err(error) => {
                eprintln!("error: {error:#}");
                std::process::exit(1);
            }
        },
        Command::Assays => {
            run_assays_list();
            std::process::exit(0);
        }
    };
    print_summary(&report);
    std::process::exit(if report.has_failures() { 1 } else { 0 });
}

/// Run date and output directory; the wall clock is read only here.
fn run_context_from_cli(cli: &Cli) -> RunContext {
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let ctx = RunContext::new(date);
    match &cli.output_dir {
        Some(dir) => ctx.with_output_dir(dir),
        None => ctx,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
