//! Error types for colour extraction and export

use std::path::PathBuf;

use thiserror::Error;

/// Result type for colour export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, matching or exporting colour schemes
#[derive(Error, Debug)]
pub enum Error {
    /// A path that must be a directory exists as something else
    #[error("not a directory ({})", .path.display())]
    DirectoryConflict { path: PathBuf },

    /// The preference document is missing or could not be decoded
    #[error("failed to read plist ({}): {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    /// The document root is not a dictionary
    #[error("plist root is not a dictionary ({})", .path.display())]
    NotADictionary { path: PathBuf },

    /// A top-level collection has the wrong shape
    #[error("unexpected type for ({key}): expected {expected}")]
    UnexpectedType { key: String, expected: &'static str },

    /// A colour entry without usable components
    #[error("malformed colour ({field}): {reason}")]
    MalformedColour { field: String, reason: String },

    /// Profile record has no string `Name`
    #[error("profile #{index} has no Name")]
    MissingName { index: usize },

    /// Output directory could not be created
    #[error("failed to create directory ({}): {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Exported colour file could not be written
    #[error("failed to write ({}): {source}", .path.display())]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },

    /// Some exports failed; details were reported individually
    #[error("{count} export(s) failed")]
    ExportFailed { count: usize },
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::DocumentRead { .. }
            | Error::NotADictionary { .. }
            | Error::UnexpectedType { .. } => 2,
            _ => 1,
        }
    }
}
