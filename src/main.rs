mod cli;
mod colour;
mod core;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

use crate::cli::{Cli, RunOptions};
use crate::core::document::read_document;
use crate::core::error::Error;
use crate::core::exporter::{export, ExportSummary};
use crate::core::extractor::extract;
use crate::core::reporter::Report;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = cli.run_options();
    let stdout = io::stdout();
    if let Err(err) = run(&options, &mut stdout.lock()) {
        eprintln!("Error: {}", err);
        std::process::exit(exit_code(&err));
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(options: &RunOptions, out: &mut impl Write) -> Result<Option<ExportSummary>> {
    // 1. Read and pick apart the preferences
    let document = read_document(&options.plist)?;
    let schemes = extract(&document)?;

    // 2. Report
    if let Some(report) = Report::build(options.report, &schemes) {
        if options.json {
            report.write_json(out)
        } else {
            report.write_text(out)
        }
        .context("Failed to write report")?;
    }

    // 3. Export
    let Some(output_directory) = &options.output_directory else {
        return Ok(None);
    };
    let summary = export(&schemes, output_directory)?;
    for failure in &summary.failures {
        eprintln!("Error: {}", failure);
    }
    if !summary.is_complete() {
        return Err(Error::ExportFailed { count: summary.failures.len() }.into());
    }

    log::info!("Exported {} colour scheme(s) to {:?}", summary.written.len(), output_directory);
    Ok(Some(summary))
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Error>().map_or(1, Error::exit_code)
}
