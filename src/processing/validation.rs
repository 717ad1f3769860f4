use std::fs;
use std::path::Path;
use crate::utils::{PadError, PadResult, PathError, is_png_path};

/// What an explicit command-line target turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Directory,
    File,
}

/// Stats an explicit target.
pub fn classify_target(path: &Path) -> PadResult<TargetKind> {
    let metadata = fs::metadata(path).map_err(|e| PathError::not_found(path, e))?;
    if metadata.is_dir() {
        Ok(TargetKind::Directory)
    } else {
        Ok(TargetKind::File)
    }
}

/// Validates an explicit file argument before it is decoded.
pub fn validate_input_file(path: &Path) -> PadResult<()> {
    let metadata = fs::metadata(path).map_err(|e| PathError::not_found(path, e))?;

    if metadata.is_dir() {
        return Err(PathError::not_a_file(path).into());
    }

    if !is_png_path(path) {
        return Err(PadError::not_a_png(path));
    }
    Ok(())
}
