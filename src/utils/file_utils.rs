use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Error, Result};

/// Make sure `path` is a directory, creating it if nothing is there.
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_directory(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    if path.exists() {
        return Err(Error::DirectoryConflict { path: path.to_path_buf() });
    }

    fs::create_dir(path).map_err(|source| Error::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Created directory {:?}", path);
    Ok(true)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
