//! # icongen
//!
//! Turns one square-ish source image into every icon an iOS app target needs,
//! laid out as an Xcode asset catalog with its `Contents.json` manifest.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Validate  source.png  →  decoded image   (readable, shorter side ≥ 512px)
//! 2. Crop      image       →  square          (centered on the shorter side)
//! 3. Render    square      →  18 bitmaps      (one per size-table entry)
//! 4. Export    bitmaps     →  PNGs + Contents.json
//! ```
//!
//! Stages run in order and the first failure aborts the run. Only rendering
//! is parallel (rayon); writes are sequential so a failed write stops the
//! ones after it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sizes`] | The static iOS size table (`SizeSpec` records) |
//! | [`naming`] | Deterministic file names and the two directory layouts |
//! | [`imaging`] | Decode, crop, filter policy, resample — pure Rust |
//! | [`export`] | Writes PNGs and `Contents.json` |
//! | [`manifest`] | The `Contents.json` document model |
//! | [`process`] | Runs the stages and reports progress events |
//! | [`config`] | `icongen.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Upscales Always Use Lanczos
//!
//! The quality tier picks the filter for downscales only. Any icon larger
//! than the cropped source is rendered with Lanczos3 whatever the tier, and
//! the run prints a note saying so. Cheap kernels are fine for shrinking but
//! visibly blocky when enlarging.
//!
//! ## Deterministic Output
//!
//! File names come from the size table alone and PNG encoding uses fixed
//! settings, so running twice on the same input produces byte-identical
//! files. A run that fails halfway leaves its partial output in place;
//! re-running overwrites it.

pub mod config;
pub mod export;
pub mod imaging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod process;
pub mod sizes;

#[cfg(test)]
pub(crate) mod test_helpers;
