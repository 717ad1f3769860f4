#![allow(dead_code)]

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::{GrayAlphaImage, ImageBuffer, ImageFormat, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

/// Per-test scratch directory under the system temp dir, removed on drop.
pub struct Scratch {
    root: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let root = std::env::temp_dir().join(format!(
            "png-even-pad-it-{}-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::Relaxed),
            name
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).expect("create scratch dir");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let dir = self.join(rel);
        fs::create_dir_all(&dir).expect("create dir");
        dir
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// Deterministic opaque gradient.
pub fn rgb_gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 5 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8])
    })
}

/// Deterministic gradient with varying, mostly non-zero alpha.
pub fn rgba_gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 3 % 256) as u8,
            (y * 7 % 256) as u8,
            90,
            (128 + (x + y) % 128) as u8,
        ])
    })
}

pub fn write_rgb(path: &Path, width: u32, height: u32) -> RgbImage {
    let image = rgb_gradient(width, height);
    image.save_with_format(path, ImageFormat::Png).expect("write rgb fixture");
    image
}

pub fn write_rgba(path: &Path, width: u32, height: u32) -> RgbaImage {
    let image = rgba_gradient(width, height);
    image.save_with_format(path, ImageFormat::Png).expect("write rgba fixture");
    image
}

pub fn write_rgba16(path: &Path, width: u32, height: u32) -> ImageBuffer<Rgba<u16>, Vec<u16>> {
    let image = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x * 1000) as u16, (y * 2000) as u16, 12345, 50000])
    });
    image.save_with_format(path, ImageFormat::Png).expect("write rgba16 fixture");
    image
}

pub fn write_rgb16(path: &Path, width: u32, height: u32) -> ImageBuffer<Rgb<u16>, Vec<u16>> {
    let image = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x * 3000) as u16, (y * 5000) as u16, 60000])
    });
    image.save_with_format(path, ImageFormat::Png).expect("write rgb16 fixture");
    image
}

pub fn write_gray_alpha(path: &Path, width: u32, height: u32) -> GrayAlphaImage {
    let image = GrayAlphaImage::from_fn(width, height, |x, y| {
        LumaA([(x * 40 % 256) as u8, (200 + y % 50) as u8])
    });
    image.save_with_format(path, ImageFormat::Png).expect("write gray-alpha fixture");
    image
}

/// Palette shared by [`write_indexed_trns`]: opaque red, and green with
/// alpha 0 via the tRNS chunk.
pub const PALETTE_RGBA: [[u8; 4]; 2] = [[255, 0, 0, 255], [0, 255, 0, 0]];

/// Writes an 8-bit indexed PNG with a tRNS chunk; returns the palette indices.
pub fn write_indexed_trns(path: &Path, width: u32, height: u32) -> Vec<u8> {
    let indices: Vec<u8> = (0..width * height).map(|i| (i % 2) as u8).collect();

    let file = File::create(path).expect("create indexed fixture");
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(PALETTE_RGBA.iter().flat_map(|c| [c[0], c[1], c[2]]).collect::<Vec<u8>>());
    encoder.set_trns(PALETTE_RGBA.iter().map(|c| c[3]).collect::<Vec<u8>>());
    let mut writer = encoder.write_header().expect("indexed header");
    writer.write_image_data(&indices).expect("indexed data");
    writer.finish().expect("indexed trailer");
    indices
}

/// Sorted file names inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
