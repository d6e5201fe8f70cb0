use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input file not found at {path}")]
    NotFound { path: PathBuf },

    #[error("input path {path} is not a regular file")]
    NotAFile { path: PathBuf },
}

/// Resolves an input path to absolute form and requires it to be an
/// existing regular file. Runs before any decoding starts so a bad path
/// fails the run immediately.
pub fn resolve_input(path: &Path) -> Result<PathBuf, InputError> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let metadata = std::fs::metadata(&absolute).map_err(|_| InputError::NotFound {
        path: absolute.clone(),
    })?;
    if !metadata.is_file() {
        return Err(InputError::NotAFile { path: absolute });
    }

    Ok(absolute)
}
