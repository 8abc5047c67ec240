//! High-level image operations: validate, crop, plan and render.
//!
//! These functions combine the pure calculations with backend execution.
//! They never write files; export is a separate step.

use super::backend::IconBackend;
use super::calculations::{CropRect, center_square, is_upscale};
use super::params::{FilterKind, QualityTier, chosen_filter};
use crate::naming::{Layout, relative_path};
use crate::sizes::SizeSpec;
use image::DynamicImage;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("cannot read source image {path}: {reason}")]
    UnreadableImage { path: PathBuf, reason: String },
    #[error(
        "source image {path} is {width}x{height}; its shorter side must be at least {min}px"
    )]
    ImageTooSmall {
        path: PathBuf,
        width: u32,
        height: u32,
        min: u32,
    },
}

/// A decoded source that passed validation.
#[derive(Debug)]
pub struct ValidatedSource {
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
    /// Width and height differ.
    pub needs_crop: bool,
    /// The shorter side is below the largest requested icon.
    pub needs_upscale: bool,
}

/// Decode `path` and check it against the minimum usable size.
///
/// `largest_target` is the biggest icon that will be produced; it only
/// drives the `needs_upscale` flag.
pub fn validate_source(
    backend: &impl IconBackend,
    path: &Path,
    min_side: u32,
    largest_target: u32,
) -> Result<ValidatedSource, SourceError> {
    let image = backend
        .load(path)
        .map_err(|e| SourceError::UnreadableImage {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let (width, height) = (image.width(), image.height());
    let short = width.min(height);
    if short < min_side {
        return Err(SourceError::ImageTooSmall {
            path: path.to_path_buf(),
            width,
            height,
            min: min_side,
        });
    }
    Ok(ValidatedSource {
        image,
        width,
        height,
        needs_crop: width != height,
        needs_upscale: short < largest_target,
    })
}

/// Center-crop to a square on the shorter side. Square inputs pass through.
///
/// Returns the square image and the region that was kept.
pub fn crop_to_square(image: DynamicImage) -> (DynamicImage, CropRect) {
    let rect = center_square(image.width(), image.height());
    if image.width() == image.height() {
        return (image, rect);
    }
    let cropped = image.crop_imm(rect.x, rect.y, rect.side, rect.side);
    (cropped, rect)
}

/// What will be produced for one size-table entry.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPlan {
    pub spec: SizeSpec,
    /// Path relative to the catalog directory.
    pub file_name: String,
    pub filter: FilterKind,
    /// The tier asked for something other than the filter used.
    pub overridden: bool,
}

/// Plan every icon: file name and filter, from the square side length.
pub fn plan_icons(
    specs: &[SizeSpec],
    source_side: u32,
    tier: QualityTier,
    layout: Layout,
) -> Vec<IconPlan> {
    specs
        .iter()
        .map(|spec| {
            let upscale = is_upscale(source_side, spec.pixels());
            let filter = chosen_filter(tier, upscale);
            IconPlan {
                spec: *spec,
                file_name: relative_path(spec, layout),
                filter,
                overridden: filter != chosen_filter(tier, false),
            }
        })
        .collect()
}

/// One resampled icon, ready for export.
#[derive(Debug)]
pub struct RenderedIcon {
    pub plan: IconPlan,
    pub image: DynamicImage,
}

/// Resample the square source for every plan, in parallel.
///
/// Output order matches `plans`.
pub fn render_icons(
    backend: &impl IconBackend,
    square: &DynamicImage,
    plans: &[IconPlan],
) -> Vec<RenderedIcon> {
    plans
        .par_iter()
        .map(|plan| RenderedIcon {
            image: backend.resample(square, plan.spec.pixels(), plan.filter),
            plan: plan.clone(),
        })
        .collect()
}
