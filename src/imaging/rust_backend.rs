//! Pure Rust backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Resample | `DynamicImage::resize_exact` with the chosen `FilterType` |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (best compression, adaptive filter) |
//!
//! PNG encoding with fixed settings is deterministic, so identical inputs
//! produce byte-identical icons across runs.

use super::backend::{BackendError, IconBackend};
use super::params::FilterKind;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, ImageReader};
use std::io::BufWriter;
use std::path::Path;

/// Narrow float color types (32-bit TIFF) to 16-bit; PNG has no float pixels.
fn to_png_encodable(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgba32F(_) => DynamicImage::ImageRgba16(image.to_rgba16()),
        DynamicImage::ImageRgb32F(_) => DynamicImage::ImageRgb16(image.to_rgb16()),
        other => other,
    }
}

/// Production backend. Stateless.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl IconBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        // Sniff the content rather than trusting the extension.
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(to_png_encodable(image))
    }

    fn resample(&self, image: &DynamicImage, side: u32, filter: FilterKind) -> DynamicImage {
        image.resize_exact(side, side, filter.filter_type())
    }

    fn save_png(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        let encoder =
            PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilter::Adaptive);
        image
            .write_with_encoder(encoder)
            .map_err(|e| BackendError::Encode(e.to_string()))
    }
}
