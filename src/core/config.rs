use std::path::{Path, PathBuf};
use crate::utils::{PadError, PadResult};

pub const DEFAULT_SCAN_DIR: &str = ".";
pub const DEFAULT_OUTPUT_SUBDIR: &str = "Texture";

/// Settings shared by every file in a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadConfig {
    /// Directory scanned when no explicit targets are given
    pub scan_dir: PathBuf,
    /// Name of the subdirectory created inside each processed location
    pub output_subdir: String,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            scan_dir: PathBuf::from(DEFAULT_SCAN_DIR),
            output_subdir: DEFAULT_OUTPUT_SUBDIR.to_string(),
        }
    }
}

impl PadConfig {
    pub fn new(scan_dir: impl Into<PathBuf>, output_subdir: impl Into<String>) -> Self {
        Self {
            scan_dir: scan_dir.into(),
            output_subdir: output_subdir.into(),
        }
    }

    /// The output subdirectory must be a single path component that is not
    /// the processed directory itself, otherwise outputs would overwrite
    /// their sources.
    pub fn validate(&self) -> PadResult<()> {
        let name = self.output_subdir.trim();
        if name.is_empty() {
            return Err(PadError::config("Output subdirectory name cannot be empty"));
        }
        if name == "." || name == ".." {
            return Err(PadError::config(format!(
                "Output subdirectory cannot be '{name}'"
            )));
        }
        if name.contains(['/', '\\']) || Path::new(name).components().count() != 1 {
            return Err(PadError::config(format!(
                "Output subdirectory must be a plain name, got '{}'",
                self.output_subdir
            )));
        }
        Ok(())
    }

    /// `<dir>/<output_subdir>`
    pub fn output_dir_for(&self, dir: &Path) -> PathBuf {
        dir.join(&self.output_subdir)
    }
}
