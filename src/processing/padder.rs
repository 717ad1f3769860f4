//! Even-dimension padding for a single PNG.
//!
//! The source is copied unscaled into the top-left corner of a canvas whose
//! sides are rounded up to even numbers. Alpha sources get a transparent
//! margin, opaque sources an opaque black one.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageBuffer, ImageError, ImageFormat, ImageReader, Pixel, Rgba, imageops};
use tracing::{debug, warn};

use crate::core::{BitDepth, FileReport, PadOutcome, PadTarget, PadTask, PixelLayout};
use crate::utils::{
    PadError, PadResult, copy_staged, create_output_dir, extract_filename, write_staged,
};

/// A decoded PNG together with its channel model.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub layout: PixelLayout,
}

impl DecodedImage {
    pub fn new(image: DynamicImage) -> Self {
        let layout = PixelLayout::from_color_type(image.color());
        Self { image, layout }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Decodes `path` as PNG whatever its content sniffs as.
pub fn decode(path: &Path) -> PadResult<DecodedImage> {
    let file = File::open(path).map_err(|e| PadError::decode(path, ImageError::IoError(e)))?;
    let image = ImageReader::with_format(BufReader::new(file), ImageFormat::Png)
        .decode()
        .map_err(|e| PadError::decode(path, e))?;
    Ok(DecodedImage::new(image))
}

/// Even-aligned dimensions for `image`.
pub fn compute_target(image: &DecodedImage) -> PadTarget {
    PadTarget::for_dimensions(image.width(), image.height())
}

/// Composites `image` onto a canvas of `target` size.
///
/// Returns the source untouched when `target` equals its dimensions. Canvas
/// sample depth follows the source, so 16-bit inputs stay 16-bit.
pub fn pad(image: &DecodedImage, target: PadTarget) -> Cow<'_, DynamicImage> {
    if !target.needs_padding(image.width(), image.height()) {
        return Cow::Borrowed(&image.image);
    }

    let canvas = match image.layout {
        PixelLayout::Alpha(BitDepth::Eight) => DynamicImage::ImageRgba8(composite(
            &image.image.to_rgba8(),
            target,
            Rgba([0, 0, 0, 0]),
        )),
        PixelLayout::Alpha(BitDepth::Sixteen) => DynamicImage::ImageRgba16(composite(
            &image.image.to_rgba16(),
            target,
            Rgba([0, 0, 0, 0]),
        )),
        PixelLayout::Opaque(BitDepth::Eight) => DynamicImage::ImageRgba8(composite(
            &image.image.to_rgba8(),
            target,
            Rgba([0, 0, 0, u8::MAX]),
        )),
        PixelLayout::Opaque(BitDepth::Sixteen) => DynamicImage::ImageRgba16(composite(
            &image.image.to_rgba16(),
            target,
            Rgba([0, 0, 0, u16::MAX]),
        )),
    };
    Cow::Owned(canvas)
}

/// Fills a `target` canvas with `fill` and replaces its top-left corner with
/// `source`, without blending.
fn composite<P: Pixel>(
    source: &ImageBuffer<P, Vec<P::Subpixel>>,
    target: PadTarget,
    fill: P,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let mut canvas = ImageBuffer::from_pixel(target.width, target.height, fill);
    imageops::replace(&mut canvas, source, 0, 0);
    canvas
}

/// Writes `image` to `path` as PNG.
pub fn encode(image: &DynamicImage, path: &Path) -> PadResult<()> {
    write_staged(path, |writer| {
        image
            .write_with_encoder(PngEncoder::new(writer))
            .map_err(|e| match e {
                ImageError::IoError(io) => PadError::write(path, io),
                other => PadError::encode(path, other),
            })
    })
}

/// Pads one file into its output directory.
///
/// Files whose dimensions are already even are copied byte for byte; if the
/// copy fails the decoded image is encoded instead.
pub fn pad_file(task: &PadTask) -> PadResult<FileReport> {
    let file_name = extract_filename(&task.input_path);
    let decoded = decode(&task.input_path)?;
    let (width, height) = (decoded.width(), decoded.height());
    let target = compute_target(&decoded);

    create_output_dir(task.output_dir())?;

    let outcome = if target.needs_padding(width, height) {
        let canvas = pad(&decoded, target);
        encode(&canvas, &task.output_path)?;
        debug!("'{}' padded {}x{} -> {}", file_name, width, height, target);
        PadOutcome::Padded { from: (width, height), to: target }
    } else {
        passthrough(&decoded, task, copy_staged)?
    };

    Ok(FileReport {
        source: task.input_path.clone(),
        output: task.output_path.clone(),
        outcome,
    })
}

/// Copies an already-even file with `copy`, encoding the decoded image when
/// the copy fails.
fn passthrough<C>(decoded: &DecodedImage, task: &PadTask, copy: C) -> PadResult<PadOutcome>
where
    C: FnOnce(&Path, &Path) -> io::Result<u64>,
{
    let file_name = extract_filename(&task.input_path);
    match copy(&task.input_path, &task.output_path) {
        Ok(bytes) => {
            debug!("'{}' already {}x{}, copied {} bytes", file_name, decoded.width(), decoded.height(), bytes);
            Ok(PadOutcome::Copied)
        }
        Err(e) => {
            warn!("Copying '{}' failed ({}), re-encoding instead", file_name, e);
            encode(&decoded.image, &task.output_path)?;
            Ok(PadOutcome::Reencoded)
        }
    }
}
