use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::core::{BatchSummary, FileReport, PadConfig, PadTask};
use crate::processing::padder::pad_file;
use crate::processing::validation::{TargetKind, classify_target, validate_input_file};
use crate::utils::{PadResult, list_png_files};

/// Sequential driver that feeds PNG files to the padder.
///
/// Per-file failures are logged and recorded in the [`BatchSummary`]; only
/// directory-level failures are returned as errors.
pub struct BatchProcessor {
    config: PadConfig,
}

impl BatchProcessor {
    /// Creates a processor after validating `config`.
    pub fn new(config: PadConfig) -> PadResult<Self> {
        config.validate()?;
        debug!(
            "Creating BatchProcessor (scan dir: {}, output subdir: {})",
            config.scan_dir.display(),
            config.output_subdir
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    /// Processes `targets` when any are given, otherwise the configured scan
    /// directory.
    ///
    /// Only the scan-directory mode can fail as a whole.
    pub fn run(&self, targets: &[PathBuf]) -> PadResult<BatchSummary> {
        if targets.is_empty() {
            self.process_directory(&self.config.scan_dir)
        } else {
            Ok(self.process_targets(targets))
        }
    }

    /// Processes explicit file and directory arguments, reporting and skipping
    /// any that fail. Fatal errors still only end the argument that raised them.
    pub fn process_targets(&self, targets: &[PathBuf]) -> BatchSummary {
        info!("Processing {} explicit targets", targets.len());
        let mut summary = BatchSummary::default();

        for target in targets {
            let kind = match classify_target(target) {
                Ok(kind) => kind,
                Err(e) => {
                    warn!("Cannot access {}: {}", target.display(), e);
                    summary.record_failure(target, e);
                    continue;
                }
            };

            match kind {
                TargetKind::Directory => match self.process_directory(target) {
                    Ok(dir_summary) => summary.merge(dir_summary),
                    Err(e) => {
                        error!("Failed to process directory {}: {}", target.display(), e);
                        summary.record_failure(target, e);
                    }
                },
                TargetKind::File => match self.process_file(target) {
                    Ok(report) => summary.reports.push(report),
                    Err(e) if e.is_fatal() => {
                        error!("Cannot write output for {}: {}", target.display(), e);
                        summary.record_failure(target, e);
                    }
                    Err(e) => {
                        warn!("Skipping file {}: {}", target.display(), e);
                        summary.record_failure(target, e);
                    }
                },
            }
        }

        summary
    }

    /// Pads every PNG directly inside `dir` into `<dir>/<output subdir>/`.
    ///
    /// The output directory is created before the first file is written.
    /// Listing `dir` and creating the output directory are fatal; decode and
    /// write failures only skip the affected file.
    pub fn process_directory(&self, dir: &Path) -> PadResult<BatchSummary> {
        let files = list_png_files(dir)?;
        let mut summary = BatchSummary::default();

        if files.is_empty() {
            info!("No PNG files found in {}", dir.display());
            return Ok(summary);
        }

        let output_dir = self.config.output_dir_for(dir);
        info!(
            "Padding {} PNG files from {} into {}",
            files.len(),
            dir.display(),
            output_dir.display()
        );

        for file in files {
            let task = PadTask::new(&file, &self.config);
            match pad_file(&task) {
                Ok(report) => summary.reports.push(report),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("Skipping {}: {}", file.display(), e);
                    summary.record_failure(&file, e);
                }
            }
        }

        if summary.failures.is_empty() {
            info!("{}: {} files saved ({} padded)", dir.display(), summary.saved(), summary.padded());
        } else {
            warn!(
                "{}: {} files saved, {} skipped",
                dir.display(),
                summary.saved(),
                summary.failures.len()
            );
        }
        Ok(summary)
    }

    /// Pads one explicit file into `<dir of file>/<output subdir>/`.
    pub fn process_file(&self, path: &Path) -> PadResult<FileReport> {
        validate_input_file(path)?;
        pad_file(&PadTask::new(path, &self.config))
    }
}
