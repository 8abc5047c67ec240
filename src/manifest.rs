//! The asset-catalog manifest (`Contents.json`).
//!
//! Xcode reads this file to map each PNG in an `.appiconset` to its slot:
//!
//! ```json
//! {
//!   "images": [
//!     { "idiom": "iphone", "size": "60x60", "scale": "3x", "filename": "iphone_60x60@3x.png" }
//!   ],
//!   "info": { "version": 1, "author": "icongen" }
//! }
//! ```
//!
//! Entries are appended as icons are written, so the manifest only ever
//! lists files that exist on disk.

use crate::naming::{scale_label, size_label};
use crate::sizes::{Idiom, SizeSpec};
use serde::{Deserialize, Serialize};

/// File name Xcode expects for the manifest.
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
    pub info: ManifestInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub idiom: Idiom,
    /// Point size, e.g. `"83.5x83.5"`.
    pub size: String,
    /// Scale factor, e.g. `"2x"`.
    pub scale: String,
    /// Path relative to the manifest's directory.
    pub filename: String,
}

impl ManifestEntry {
    pub fn new(spec: &SizeSpec, filename: impl Into<String>) -> Self {
        Self {
            idiom: spec.idiom,
            size: size_label(spec),
            scale: scale_label(spec),
            filename: filename.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl Manifest {
    pub fn new(author: impl Into<String>, version: u32) -> Self {
        Self {
            images: Vec::new(),
            info: ManifestInfo {
                version,
                author: author.into(),
            },
        }
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.images.push(entry);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
