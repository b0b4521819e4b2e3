use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::document::write_document;
use crate::core::error::{Error, Result};
use crate::core::extractor::ColourSchemes;
use crate::core::record::ColourRecord;
use crate::utils::file_utils::ensure_directory;

pub const EXTENSION: &str = "itermcolors";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SchemeKind {
    Profile,
    Preset,
}

impl SchemeKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            SchemeKind::Profile => "profile",
            SchemeKind::Preset => "preset",
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One scheme that could not be exported.
#[derive(Debug)]
pub struct ExportFailure {
    pub kind: SchemeKind,
    pub name: Option<String>,
    pub error: Error,
}

impl fmt::Display for ExportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({}): {}", self.kind, name, self.error),
            None => write!(f, "{}: {}", self.kind, self.error),
        }
    }
}

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
    pub failures: Vec<ExportFailure>,
}

impl ExportSummary {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, kind: SchemeKind, name: Option<&str>, outcome: Result<PathBuf>) {
        match outcome {
            Ok(path) => self.written.push(path),
            Err(error) => self.failures.push(ExportFailure {
                kind,
                name: name.map(str::to_string),
                error,
            }),
        }
    }
}

/// Write every profile and preset colour scheme under `output_directory`.
///
/// Directory problems abort before anything is written. A scheme that fails
/// on its own is recorded in the summary and the rest are still exported.
pub fn export(schemes: &ColourSchemes, output_directory: &Path) -> Result<ExportSummary> {
    ensure_directory(output_directory)?;
    if !schemes.profiles.is_empty() {
        ensure_directory(&output_directory.join(SchemeKind::Profile.dir_name()))?;
    }
    if !schemes.presets.is_empty() {
        ensure_directory(&output_directory.join(SchemeKind::Preset.dir_name()))?;
    }

    let mut summary = ExportSummary::default();

    for profile in &schemes.profiles {
        match profile.name() {
            Ok(name) => {
                let outcome = write_scheme(SchemeKind::Profile, name, &profile.record, output_directory);
                summary.record(SchemeKind::Profile, Some(name), outcome);
            }
            Err(error) => summary.record(SchemeKind::Profile, None, Err(error)),
        }
    }

    for (name, preset) in &schemes.presets {
        let outcome = write_scheme(SchemeKind::Preset, name, preset, output_directory);
        summary.record(SchemeKind::Preset, Some(name), outcome);
    }

    Ok(summary)
}

/// Path a scheme is written to. The name is used verbatim.
pub fn scheme_path(output_directory: &Path, kind: SchemeKind, name: &str) -> PathBuf {
    output_directory
        .join(kind.dir_name())
        .join(format!("{}.{}", name, EXTENSION))
}

fn write_scheme(
    kind: SchemeKind,
    name: &str,
    record: &ColourRecord,
    output_directory: &Path,
) -> Result<PathBuf> {
    if name.contains(std::path::is_separator) {
        log::warn!("{} name ({}) contains a path separator", kind, name);
    }

    let path = scheme_path(output_directory, kind, name);
    log::info!("writing ({}) ({}) to ({})", kind, name, path.display());
    write_document(&path, record.colour_scheme())?;
    Ok(path)
}
