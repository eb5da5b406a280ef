use log::info;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::FinderError;

/// Turn what the user typed in the save prompt into a destination path.
///
/// Returns `None` for an empty answer, which counts as cancelling the save.
/// A missing extension is filled in with `default_extension`.
pub fn resolve_export_path(input: &str, default_extension: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut path = PathBuf::from(trimmed);
    if path.extension().is_none() && !default_extension.is_empty() {
        path.set_extension(default_extension.trim_start_matches('.'));
    }
    Some(path)
}

/// Write the detail text to `path`, ending it with exactly one newline.
pub fn export_details(path: &Path, text: &str) -> Result<(), FinderError> {
    let to_export_error = |source| FinderError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_export_error)?;
    file.write_all(text.as_bytes()).map_err(to_export_error)?;
    if !text.ends_with('\n') {
        file.write_all(b"\n").map_err(to_export_error)?;
    }
    file.flush().map_err(to_export_error)?;

    info!("Saved recipe to {}", path.display());
    Ok(())
}
