//! Padding task definition and output path derivation.

use std::path::{Path, PathBuf};
use crate::core::PadConfig;

/// A single PNG to pad.
///
/// The output path is derived from the source every time a task is built;
/// nothing is cached between files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadTask {
    /// Path to the source PNG
    pub input_path: PathBuf,
    /// `<dir of input>/<output subdir>/<file name of input>`
    pub output_path: PathBuf,
}

impl PadTask {
    pub fn new(input_path: impl Into<PathBuf>, config: &PadConfig) -> Self {
        let input_path = input_path.into();
        let output_path = output_path_for(&input_path, &config.output_subdir);
        Self { input_path, output_path }
    }

    /// Directory that must exist before the output can be written.
    pub fn output_dir(&self) -> &Path {
        self.output_path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// `join(baseDir(source), output_subdir, baseName(source))`
pub fn output_path_for(source: &Path, output_subdir: &str) -> PathBuf {
    let base_dir = source.parent().unwrap_or_else(|| Path::new(""));
    let mut output = base_dir.join(output_subdir);
    if let Some(name) = source.file_name() {
        output.push(name);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_lands_in_sibling_subdirectory() {
        let config = PadConfig::default();
        let task = PadTask::new("assets/ui/button.png", &config);
        assert_eq!(task.output_path, PathBuf::from("assets/ui/Texture/button.png"));
        assert_eq!(task.output_dir(), Path::new("assets/ui/Texture"));
    }

    #[test]
    fn bare_file_name_uses_current_directory() {
        let task = PadTask::new("icon.PNG", &PadConfig::new(".", "Out"));
        assert_eq!(task.output_path, PathBuf::from("Out/icon.PNG"));
        assert_eq!(task.output_dir(), Path::new("Out"));
    }
}
