//! Pixel backend trait and shared types.
//!
//! The [`IconBackend`] trait is the seam between pipeline logic (which decides
//! what to crop, which filter to use, where to write) and the code that
//! touches pixels and files. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use a recording
//! mock so filter policy and naming can be checked without encoding images.

use super::params::FilterKind;
use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Operations every backend must support.
pub trait IconBackend: Sync {
    /// Read and decode an image file.
    fn load(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Resample to a `side` × `side` square with the given filter.
    ///
    /// The input is already square. The color type (and alpha) is preserved.
    fn resample(&self, image: &DynamicImage, side: u32, filter: FilterKind) -> DynamicImage;

    /// Encode as PNG and write to `path`, replacing any existing file.
    fn save_png(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError>;
}
