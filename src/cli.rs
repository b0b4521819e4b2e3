use std::path::PathBuf;

use clap::Parser;

use crate::core::reporter::ReportMode;
use crate::utils::file_utils::expand_home;

pub const DEFAULT_PLIST: &str = "~/Library/Preferences/com.googlecode.iterm2.plist";

/// Export iTerm2 profile and preset colour schemes to .itermcolors files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input plist file
    #[arg(short, long, default_value = DEFAULT_PLIST)]
    pub plist: PathBuf,

    /// Do not show profiles that match presets
    #[arg(short, long)]
    pub no_match: bool,

    /// Show presets that are not used by any profiles (implies -n)
    #[arg(short, long)]
    pub unused: bool,

    /// Output directory
    #[arg(short, long)]
    pub output_directory: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Settings for one run, resolved from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub plist: PathBuf,
    pub report: ReportMode,
    pub json: bool,
    pub output_directory: Option<PathBuf>,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        // The unused report replaces the match report
        let report = if self.unused {
            ReportMode::Unused
        } else if self.no_match {
            ReportMode::Silent
        } else {
            ReportMode::Matches
        };

        RunOptions {
            plist: expand_home(&self.plist),
            report,
            json: self.json,
            output_directory: self.output_directory.clone(),
        }
    }
}
