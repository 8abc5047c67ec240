//! Shared test utilities: synthetic source images.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Write an opaque RGB gradient PNG.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Write an RGBA PNG with a varying alpha channel.
pub fn write_test_png_rgba(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([200, (x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(path).unwrap();
}
