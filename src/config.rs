//! Generator configuration.
//!
//! Handles loading, validating, and merging `icongen.toml`. Stock defaults
//! are overridden by a user config file, which is in turn overridden by
//! command-line flags.
//!
//! ## Config File Location
//!
//! `icongen.toml` in the working directory is picked up automatically. An
//! explicit `--config <file>` replaces that lookup.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! quality = "high"          # high | medium | low (downscale filter)
//! layout = "catalog"        # catalog (flat) | idiom (one dir per device)
//! min_source_size = 512     # Minimum shorter side of the source, in pixels
//!
//! [output]
//! platform_dir = "ios"
//! catalog_dir = "AppIcon.appiconset"
//!
//! [manifest]
//! enabled = true            # Write Contents.json
//! author = "icongen"
//! version = 1
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::QualityTier;
use crate::naming::Layout;
use crate::sizes::{APP_ICON_SIZES, largest_pixels};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "icongen.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `icongen.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconConfig {
    /// Resampling tier for downscaled icons.
    pub quality: QualityTier,
    /// File arrangement inside the catalog directory.
    pub layout: Layout,
    /// Smallest acceptable shorter side of the source image.
    pub min_source_size: u32,
    /// Output directory names.
    pub output: OutputConfig,
    /// `Contents.json` settings.
    pub manifest: ManifestConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            quality: QualityTier::default(),
            layout: Layout::default(),
            min_source_size: 512,
            output: OutputConfig::default(),
            manifest: ManifestConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl IconConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let largest = largest_pixels(APP_ICON_SIZES);
        if self.min_source_size == 0 || self.min_source_size > largest {
            return Err(ConfigError::Validation(format!(
                "min_source_size must be 1-{largest}"
            )));
        }
        for (key, value) in [
            ("output.platform_dir", &self.output.platform_dir),
            ("output.catalog_dir", &self.output.catalog_dir),
        ] {
            if !is_single_component(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a single non-empty directory name"
                )));
            }
        }
        Ok(())
    }
}

fn is_single_component(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Where the icon set lands under the output root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Platform subdirectory, e.g. `ios`.
    pub platform_dir: String,
    /// Asset catalog directory holding the PNGs and `Contents.json`.
    pub catalog_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            platform_dir: "ios".to_string(),
            catalog_dir: "AppIcon.appiconset".to_string(),
        }
    }
}

/// Manifest generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Write `Contents.json` next to the icons.
    pub enabled: bool,
    /// `info.author` field.
    pub author: String,
    /// `info.version` field.
    pub version: u32,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            author: "icongen".to_string(),
            version: 1,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel resampling workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(IconConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<IconConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IconConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load an explicit config file. A missing file is an error.
pub fn load_config_file(path: &Path) -> Result<IconConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Load `icongen.toml` from `dir` if present, else the stock defaults.
pub fn load_config(dir: &Path) -> Result<IconConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return resolve_config(None);
    }
    load_config_file(&path)
}

/// Returns a fully-commented stock `icongen.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# icongen configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# Resampling quality for icons smaller than the source:
#   high   - Lanczos3 (sharpest, slowest)
#   medium - bilinear
#   low    - nearest neighbour
# Icons larger than the source always use Lanczos3.
quality = "high"

# File arrangement inside the catalog directory:
#   catalog - flat, Xcode asset-catalog style (iphone_60x60@3x.png)
#   idiom   - one subdirectory per device class (iphone/60x60@3x.png)
layout = "catalog"

# Minimum length of the source image's shorter side, in pixels.
min_source_size = 512

# ---------------------------------------------------------------------------
# Output directories: <output>/<platform_dir>/<catalog_dir>/
# ---------------------------------------------------------------------------
[output]
platform_dir = "ios"
catalog_dir = "AppIcon.appiconset"

# ---------------------------------------------------------------------------
# Contents.json manifest
# ---------------------------------------------------------------------------
[manifest]
enabled = true
author = "icongen"
version = 1

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel resampling workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
