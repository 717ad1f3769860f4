//! Command-line parsing.
//!
//! Accepts the single-dash long flags drag-and-drop launchers and older
//! scripts pass (`-dir`, `-out`) as well as the usual `--dir` / `--out`.

use std::ffi::OsString;
use std::path::PathBuf;
use clap::Parser;
use crate::core::{DEFAULT_OUTPUT_SUBDIR, DEFAULT_SCAN_DIR, PadConfig};

/// Pad PNG files to even width and height.
#[derive(Debug, Parser)]
#[command(name = "png-even-pad", version, about)]
pub struct Cli {
    /// Directory to scan when no paths are given
    #[arg(long = "dir", value_name = "PATH", default_value = DEFAULT_SCAN_DIR)]
    pub dir: PathBuf,

    /// Name of the output subdirectory created next to each processed file
    #[arg(long = "out", value_name = "NAME", default_value = DEFAULT_OUTPUT_SUBDIR)]
    pub out: String,

    /// PNG files or directories to process; take precedence over --dir
    #[arg(value_name = "PATHS")]
    pub paths: Vec<OsString>,
}

/// Long flags that may be spelled with a single dash.
const LONG_FLAGS: &[&str] = &["dir", "out"];

/// Rewrites `-dir` / `-out` (and `-dir=...`) to their double-dash form.
///
/// Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            let Some(flag) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

impl Cli {
    /// Parses the process arguments after flag normalisation.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn config(&self) -> PadConfig {
        PadConfig::new(&self.dir, self.out.clone())
    }

    /// Positional paths with surrounding whitespace removed; blank ones are
    /// dropped. Paths that are not valid UTF-8 are kept byte for byte.
    pub fn targets(&self) -> Vec<PathBuf> {
        self.paths
            .iter()
            .filter_map(|p| match p.to_str() {
                Some(text) => {
                    let text = text.trim();
                    (!text.is_empty()).then(|| PathBuf::from(text))
                }
                None => Some(PathBuf::from(p)),
            })
            .collect()
    }
}
