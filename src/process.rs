//! The icon generation pipeline.
//!
//! ```text
//! validate  source.png  →  decoded image   (readable? big enough?)
//! crop      image       →  square          (centered, shorter side)
//! render    square      →  one bitmap per size-table entry (parallel)
//! export    bitmaps     →  PNG files + Contents.json
//! ```
//!
//! Stages run strictly in order and the first error aborts the run. Progress
//! is reported through an optional [`ProcessEvent`] channel; formatting lives
//! in [`crate::output`].
//!
//! ## Output Structure
//!
//! ```text
//! AppIcons/
//! └── ios/
//!     └── AppIcon.appiconset/
//!         ├── Contents.json
//!         ├── appstore_1024x1024.png
//!         ├── iphone_60x60@3x.png
//!         ├── ipad_83.5x83.5@2x.png
//!         └── ...
//! ```

use crate::config::IconConfig;
use crate::export::{ExportError, export_icons, write_manifest};
use crate::imaging::{
    CropRect, FilterKind, IconBackend, QualityTier, RustBackend, SourceError, crop_to_square,
    plan_icons, render_icons, validate_source,
};
use crate::manifest::Manifest;
use crate::sizes::{APP_ICON_SIZES, SizeSpec, largest_pixels};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Progress events, in the order the pipeline produces them.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    SourceAccepted {
        path: String,
        width: u32,
        height: u32,
    },
    /// The source was not square and a centered region was kept.
    SourceCropped {
        width: u32,
        height: u32,
        rect: CropRect,
    },
    /// An upscale forced Lanczos over the requested tier.
    FilterOverridden {
        file_name: String,
        pixels: u32,
        source_side: u32,
        requested: QualityTier,
    },
    IconWritten {
        index: usize,
        file_name: String,
        pixels: u32,
        filter: FilterKind,
    },
    ManifestWritten {
        path: String,
        entries: usize,
    },
}

/// What a successful run produced.
#[derive(Debug)]
pub struct ProcessResult {
    /// Directory holding the icons (and the manifest, if written).
    pub catalog_dir: PathBuf,
    /// Every icon written, in table order.
    pub icons: Vec<PathBuf>,
    /// The manifest, when enabled.
    pub manifest: Option<Manifest>,
    pub source_width: u32,
    pub source_height: u32,
    /// Side of the square the icons were rendered from.
    pub square_side: u32,
}

/// Outcome of validating a source without generating anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReport {
    pub width: u32,
    pub height: u32,
    pub needs_crop: bool,
    pub needs_upscale: bool,
    pub crop: CropRect,
}

/// `<output_root>/<platform_dir>/<catalog_dir>`.
pub fn catalog_dir(output_root: &Path, config: &IconConfig) -> PathBuf {
    output_root
        .join(&config.output.platform_dir)
        .join(&config.output.catalog_dir)
}

/// Generate the full icon set for `input` with the production backend.
pub fn process(
    input: &Path,
    output_root: &Path,
    config: &IconConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    process_with_backend(
        &RustBackend::new(),
        APP_ICON_SIZES,
        input,
        output_root,
        config,
        events,
    )
}

/// Run the pipeline with a specific backend and size table (allows testing with mock).
pub fn process_with_backend(
    backend: &impl IconBackend,
    specs: &[SizeSpec],
    input: &Path,
    output_root: &Path,
    config: &IconConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let emit = |event: ProcessEvent| {
        if let Some(tx) = &events {
            tx.send(event).ok();
        }
    };

    let source = validate_source(
        backend,
        input,
        config.min_source_size,
        largest_pixels(specs),
    )?;
    let (width, height) = (source.width, source.height);
    emit(ProcessEvent::SourceAccepted {
        path: input.display().to_string(),
        width,
        height,
    });

    let (square, rect) = crop_to_square(source.image);
    if source.needs_crop {
        emit(ProcessEvent::SourceCropped {
            width,
            height,
            rect,
        });
    }

    let plans = plan_icons(specs, rect.side, config.quality, config.layout);
    for plan in plans.iter().filter(|p| p.overridden) {
        emit(ProcessEvent::FilterOverridden {
            file_name: plan.file_name.clone(),
            pixels: plan.spec.pixels(),
            source_side: rect.side,
            requested: config.quality,
        });
    }

    let rendered = render_icons(backend, &square, &plans);
    drop(square);

    let catalog_dir = catalog_dir(output_root, config);
    let mut manifest = config
        .manifest
        .enabled
        .then(|| Manifest::new(&config.manifest.author, config.manifest.version));
    let icons = export_icons(
        backend,
        &rendered,
        &catalog_dir,
        manifest.as_mut(),
        events.as_ref(),
    )?;

    if let Some(m) = &manifest {
        let path = write_manifest(m, &catalog_dir)?;
        emit(ProcessEvent::ManifestWritten {
            path: path.display().to_string(),
            entries: m.images.len(),
        });
    }

    Ok(ProcessResult {
        catalog_dir,
        icons,
        manifest,
        source_width: width,
        source_height: height,
        square_side: rect.side,
    })
}

/// Validate `input` and describe what a run would have to do with it.
pub fn check(input: &Path, config: &IconConfig) -> Result<SourceReport, ProcessError> {
    check_with_backend(&RustBackend::new(), input, config)
}

pub fn check_with_backend(
    backend: &impl IconBackend,
    input: &Path,
    config: &IconConfig,
) -> Result<SourceReport, ProcessError> {
    let source = validate_source(
        backend,
        input,
        config.min_source_size,
        largest_pixels(APP_ICON_SIZES),
    )?;
    Ok(SourceReport {
        width: source.width,
        height: source.height,
        needs_crop: source.needs_crop,
        needs_upscale: source.needs_upscale,
        crop: crate::imaging::center_square(source.width, source.height),
    })
}
