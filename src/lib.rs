// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod cli;

// Public exports for external consumers
pub use crate::core::{BatchSummary, FileReport, PadConfig, PadOutcome, PadTarget, PadTask, PixelLayout};
pub use crate::processing::{BatchProcessor, DecodedImage, compute_target, decode, encode, pad, pad_file};
pub use crate::utils::{PadError, PadResult, PathError};

// This library file is the public API; the command-line entry point is in main.rs.
