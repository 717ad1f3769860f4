//! Core types and configuration.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`PadConfig`]: Scan directory and output subdirectory name
//! - [`PadTask`]: One source PNG and its derived output path
//! - [`PadTarget`]: Even-aligned canvas dimensions
//! - [`PixelLayout`]: Channel model that decides the padding fill
//! - [`FileReport`] / [`BatchSummary`]: Results of a run

mod config;
mod task;
mod types;

pub use config::{DEFAULT_OUTPUT_SUBDIR, DEFAULT_SCAN_DIR, PadConfig};
pub use task::{PadTask, output_path_for};
pub use types::{BatchSummary, BitDepth, FileReport, PadOutcome, PadTarget, PixelLayout};
