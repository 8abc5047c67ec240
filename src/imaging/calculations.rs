//! Pure calculation functions for icon geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// A square region inside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub side: u32,
}

/// Centered square crop for a `width` × `height` image.
///
/// The side is the shorter dimension. Pixels are removed from the longer
/// axis only, split evenly; with an odd difference the extra pixel comes off
/// the far edge.
///
/// # Examples
/// ```
/// # use icongen::imaging::{CropRect, center_square};
/// assert_eq!(center_square(1200, 1024), CropRect { x: 88, y: 0, side: 1024 });
/// assert_eq!(center_square(600, 601), CropRect { x: 0, y: 0, side: 600 });
/// ```
pub fn center_square(width: u32, height: u32) -> CropRect {
    let side = width.min(height);
    CropRect {
        x: (width - side) / 2,
        y: (height - side) / 2,
        side,
    }
}

/// Whether producing `target` pixels from a `source_side` square enlarges it.
pub fn is_upscale(source_side: u32, target: u32) -> bool {
    target > source_side
}
