//! Core types for padding decisions and results.

use std::fmt;
use std::path::PathBuf;
use image::ColorType;

/// Sample depth of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Eight,
    Sixteen,
}

/// Channel model of a decoded PNG, resolved once at decode time.
///
/// Decides the padding fill: `Alpha` sources are padded with transparent
/// pixels, `Opaque` sources with opaque black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// Gray or RGB without an alpha channel
    Opaque(BitDepth),
    /// Gray-alpha or RGBA
    Alpha(BitDepth),
}

impl PixelLayout {
    /// Maps a decoded colour type onto the padding layout.
    ///
    /// Palette PNGs never reach this point: the decoder expands them to RGB,
    /// or to RGBA when they carry a transparency chunk.
    pub fn from_color_type(color: ColorType) -> Self {
        let depth = if color.bytes_per_pixel() / color.channel_count() > 1 {
            BitDepth::Sixteen
        } else {
            BitDepth::Eight
        };

        if color.has_alpha() {
            Self::Alpha(depth)
        } else {
            Self::Opaque(depth)
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Alpha(_))
    }

    pub fn depth(&self) -> BitDepth {
        match self {
            Self::Opaque(depth) | Self::Alpha(depth) => *depth,
        }
    }
}

/// Even-aligned canvas dimensions for a source image.
///
/// Each side is rounded up to the next even number, so it either stays the
/// same or grows by exactly one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadTarget {
    pub width: u32,
    pub height: u32,
}

impl PadTarget {
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        Self {
            width: width + width % 2,
            height: height + height % 2,
        }
    }

    /// Whether a canvas of this size differs from `width` x `height`.
    pub fn needs_padding(&self, width: u32, height: u32) -> bool {
        (self.width, self.height) != (width, height)
    }
}

impl fmt::Display for PadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// How a file ended up in the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadOutcome {
    /// Dimensions were already even; original bytes copied verbatim
    Copied,
    /// Dimensions were already even but the byte copy failed, so the decoded
    /// image was written back out
    Reencoded,
    /// Canvas was enlarged
    Padded { from: (u32, u32), to: PadTarget },
}

/// Result of padding a single file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub outcome: PadOutcome,
}

/// Accumulated result of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub reports: Vec<FileReport>,
    /// (path, error message) for every skipped file or argument
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    /// Number of PNG files written to an output directory.
    pub fn saved(&self) -> usize {
        self.reports.len()
    }

    pub fn padded(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, PadOutcome::Padded { .. }))
            .count()
    }

    pub fn record_failure(&mut self, path: impl Into<PathBuf>, error: impl fmt::Display) {
        self.failures.push((path.into(), error.to_string()));
    }

    pub fn merge(&mut self, other: BatchSummary) {
        self.reports.extend(other.reports);
        self.failures.extend(other.failures);
    }
}
