//! Image processing — pure Rust, no system dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **Crop** | `DynamicImage::crop_imm` on a centered square |
//! | **Resample** | `resize_exact` with Lanczos3 / Triangle / Nearest |
//! | **Encode** | `PngEncoder` (lossless) |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for crop geometry (unit testable)
//! - **Parameters**: Quality tiers and the filter-selection policy
//! - **Backend**: [`IconBackend`] trait + [`RustBackend`]
//! - **Operations**: Validate, crop, plan and render, combining the above

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, IconBackend};
pub use calculations::{CropRect, center_square, is_upscale};
pub use operations::{
    IconPlan, RenderedIcon, SourceError, ValidatedSource, crop_to_square, plan_icons,
    render_icons, validate_source,
};
pub use params::{FilterKind, QualityTier, chosen_filter};
pub use rust_backend::RustBackend;
