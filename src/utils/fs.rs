use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::utils::{PadError, PadResult, PathError, is_png_path};

/// Lists the PNG files directly inside `dir`, sorted by file name.
///
/// Subdirectories are skipped even when their name ends in `.png`; nothing is
/// traversed recursively.
pub fn list_png_files(dir: &Path) -> PadResult<Vec<PathBuf>> {
    let metadata = fs::metadata(dir).map_err(|e| PathError::not_found(dir, e))?;
    if !metadata.is_dir() {
        return Err(PathError::not_a_directory(dir).into());
    }

    let entries = fs::read_dir(dir).map_err(|e| PathError::read_dir(dir, e))?;

    let mut names: Vec<OsString> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PathError::read_dir(dir, e))?;
        let file_type = entry.file_type().map_err(|e| PathError::read_dir(dir, e))?;
        if file_type.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if is_png_path(&name) {
            names.push(name);
        }
    }
    names.sort();

    debug!("Found {} PNG files in {}", names.len(), dir.display());
    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

/// Creates the output directory and any missing parents.
pub fn create_output_dir(path: &Path) -> PadResult<()> {
    fs::create_dir_all(path).map_err(|e| PadError::directory_create(path, e))
}

/// Staging suffix for encoded output.
const WRITE_STAGE: &str = "partial";
/// Staging suffix for byte copies, kept apart from [`WRITE_STAGE`] so a
/// blocked copy never blocks the re-encode fallback as well.
const COPY_STAGE: &str = "copy";

/// Hidden sibling that receives the bytes before they are renamed into place.
fn staging_path(dest: &Path, stage: &str) -> PathBuf {
    let mut name = OsString::from(".");
    if let Some(file_name) = dest.file_name() {
        name.push(file_name);
    }
    name.push(".");
    name.push(stage);
    dest.with_file_name(name)
}

/// Staging file used by [`copy_staged`] for `dest`.
pub fn copy_staging_path(dest: &Path) -> PathBuf {
    staging_path(dest, COPY_STAGE)
}

/// Writes `dest` through a staging file so an interrupted run never leaves a
/// truncated file under the final name.
pub fn write_staged<F>(dest: &Path, write: F) -> PadResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> PadResult<()>,
{
    let staging = staging_path(dest, WRITE_STAGE);
    let result = (|| {
        let file = File::create(&staging).map_err(|e| PadError::write(dest, e))?;
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer.flush().map_err(|e| PadError::write(dest, e))?;
        drop(writer);
        fs::rename(&staging, dest).map_err(|e| PadError::write(dest, e))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

/// Copies `src` to `dest` byte for byte, staged like [`write_staged`].
pub fn copy_staged(src: &Path, dest: &Path) -> io::Result<u64> {
    let staging = copy_staging_path(dest);
    let result = fs::copy(src, &staging).and_then(|bytes| {
        fs::rename(&staging, dest)?;
        Ok(bytes)
    });

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}
