//! Output file naming for generated icons.
//!
//! Names are derived purely from a [`SizeSpec`]'s fields, so the same table
//! always produces the same paths and re-runs overwrite in place.
//!
//! ## Layouts
//!
//! - **Catalog** (default): one flat directory, the shape Xcode expects inside
//!   an `.appiconset`. The idiom is folded into the file name to keep names
//!   unique: `iphone_60x60@3x.png`, `ipad_83.5x83.5@2x.png`.
//! - **Idiom**: one subdirectory per device class: `iphone/60x60@3x.png`,
//!   `ipad/76x76@2x.png`.
//!
//! The App Store icon has no scale variants and is always
//! `appstore_1024x1024.png` (inside `ios-marketing/` for the idiom layout).

use crate::sizes::SizeSpec;
use serde::{Deserialize, Serialize};

/// How generated files are arranged under the catalog directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// All icons side by side, Xcode asset-catalog style.
    #[default]
    Catalog,
    /// One subdirectory per device class.
    Idiom,
}

/// Render a point size without trailing zeros: `20`, `83.5`, `1024`.
pub fn format_points(points: f32) -> String {
    format!("{}", points)
}

/// `<pt>x<pt>` as used in both file names and the manifest `size` field.
pub fn size_label(spec: &SizeSpec) -> String {
    let pt = format_points(spec.points);
    format!("{pt}x{pt}")
}

/// `<n>x` as used in the manifest `scale` field.
pub fn scale_label(spec: &SizeSpec) -> String {
    format!("{}x", spec.scale)
}

/// Bare file name, without any idiom qualification.
///
/// - `60pt @3x` → `60x60@3x.png`
/// - App Store → `appstore_1024x1024.png`
pub fn icon_file_name(spec: &SizeSpec) -> String {
    if spec.is_store_icon() {
        let px = spec.pixels();
        return format!("appstore_{px}x{px}.png");
    }
    format!("{}@{}.png", size_label(spec), scale_label(spec))
}

/// Path of the icon relative to the catalog directory, `/`-separated.
///
/// This is also the `filename` recorded in the manifest.
pub fn relative_path(spec: &SizeSpec, layout: Layout) -> String {
    let name = icon_file_name(spec);
    match layout {
        Layout::Catalog if spec.is_store_icon() => name,
        Layout::Catalog => format!("{}_{}", spec.idiom.as_str(), name),
        Layout::Idiom => format!("{}/{}", spec.idiom.as_str(), name),
    }
}
