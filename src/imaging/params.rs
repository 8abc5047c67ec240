//! Parameter types for resampling.
//!
//! These describe *which* filter to use, not how to run it. The backend maps
//! a [`FilterKind`] onto the `image` crate's `FilterType`.
//!
//! ## Types
//!
//! - [`QualityTier`] — user-facing speed/fidelity choice (`high`, `medium`, `low`).
//! - [`FilterKind`] — the resampling kernel actually used for one icon.
//! - [`chosen_filter`] — the tier → filter policy, including the upscale override.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested resampling quality.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Lanczos for everything.
    #[default]
    High,
    /// Bilinear for downscales.
    Medium,
    /// Nearest-neighbour for downscales.
    Low,
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QualityTier::High => "high",
            QualityTier::Medium => "medium",
            QualityTier::Low => "low",
        })
    }
}

/// Resampling kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Lanczos3,
    Triangle,
    Nearest,
}

impl FilterKind {
    pub fn filter_type(self) -> FilterType {
        match self {
            FilterKind::Lanczos3 => FilterType::Lanczos3,
            FilterKind::Triangle => FilterType::Triangle,
            FilterKind::Nearest => FilterType::Nearest,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Lanczos3 => "lanczos3",
            FilterKind::Triangle => "bilinear",
            FilterKind::Nearest => "nearest",
        }
    }
}

/// Pick the filter for one icon.
///
/// The tier only governs downscales. Upscaling always uses Lanczos: cheap
/// kernels leave visible blocking and blur when enlarging.
pub fn chosen_filter(tier: QualityTier, is_upscale: bool) -> FilterKind {
    if is_upscale {
        return FilterKind::Lanczos3;
    }
    match tier {
        QualityTier::High => FilterKind::Lanczos3,
        QualityTier::Medium => FilterKind::Triangle,
        QualityTier::Low => FilterKind::Nearest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downscale_follows_tier() {
        assert_eq!(chosen_filter(QualityTier::High, false), FilterKind::Lanczos3);
        assert_eq!(chosen_filter(QualityTier::Medium, false), FilterKind::Triangle);
        assert_eq!(chosen_filter(QualityTier::Low, false), FilterKind::Nearest);
    }

    #[test]
    fn upscale_always_lanczos() {
        for tier in [QualityTier::High, QualityTier::Medium, QualityTier::Low] {
            assert_eq!(chosen_filter(tier, true), FilterKind::Lanczos3, "{tier}");
        }
    }

    #[test]
    fn default_tier_is_high() {
        assert_eq!(QualityTier::default(), QualityTier::High);
    }

    #[test]
    fn tier_parses_from_toml_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            quality: QualityTier,
        }
        let w: Wrapper = toml::from_str("quality = \"medium\"").unwrap();
        assert_eq!(w.quality, QualityTier::Medium);
    }

    #[test]
    fn filter_kind_maps_to_image_filter() {
        assert_eq!(FilterKind::Lanczos3.filter_type(), FilterType::Lanczos3);
        assert_eq!(FilterKind::Triangle.filter_type(), FilterType::Triangle);
        assert_eq!(FilterKind::Nearest.filter_type(), FilterType::Nearest);
    }
}
