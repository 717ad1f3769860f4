//! Error types for the PNG padder.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// File path errors.
#[derive(Error, Debug)]
pub enum PathError {
    /// Path does not exist or cannot be stat'ed
    #[error("Path not found: {path} ({source})")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotDirectory(PathBuf),
    /// IO error while reading a directory
    #[error("Cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Main error type for the padder.
///
/// Per-file variants are skipped by the batch driver; [`PadError::is_fatal`]
/// marks the ones that abort a whole directory.
#[derive(Error, Debug)]
pub enum PadError {
    /// Input path validation failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// Explicit file argument without a `.png` suffix
    #[error("Not a PNG file: {0}")]
    NotAPng(PathBuf),

    /// Malformed or unsupported PNG data
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output subdirectory could not be created
    #[error("Cannot create output directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// PNG encoder rejected the image
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output file could not be created, written or moved into place
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for padder operations.
pub type PadResult<T> = Result<T, PadError>;

// Helper methods for error creation
impl PadError {
    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode { path: path.into(), source }
    }

    pub fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Encode { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }

    pub fn directory_create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryCreate { path: path.into(), source }
    }

    pub fn not_a_png(path: impl Into<PathBuf>) -> Self {
        Self::NotAPng(path.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    /// Errors that abort the directory being processed rather than one file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::DirectoryCreate { .. }
                | Self::Config(_)
                | Self::Path(PathError::NotDirectory(_) | PathError::ReadDir { .. })
        )
    }
}

// Helper methods for path error creation
impl PathError {
    pub fn not_found(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::NotFound { path: path.into(), source }
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::NotFile(path.into())
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotDirectory(path.into())
    }

    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir { path: path.into(), source }
    }
}
