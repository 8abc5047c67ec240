//! CLI output formatting.
//!
//! Every display has a `format_*` function returning `Vec<String>` for
//! testability and, where the binary needs it, a `print_*` wrapper that
//! writes to stdout. Format functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Source: logo.png (1200x1024)
//! Warning: source is not square (1200x1024); using centered 1024x1024 region at (88, 0)
//! Note: appstore_1024x1024.png (1024px) upscales the 600px source; using lanczos3 instead of the medium filter
//! 001 Created: iphone_20x20@2x.png (40x40, lanczos3)
//! ...
//! Manifest: AppIcons/ios/AppIcon.appiconset/Contents.json (18 entries)
//!
//! Generated 18 icons in /abs/AppIcons/ios/AppIcon.appiconset
//! ```
//!
//! ## Sizes
//!
//! ```text
//! idiom          size       scale  pixels  usage
//! iphone         20x20      2x     40      notification
//! ```

use crate::naming::{scale_label, size_label};
use crate::process::{ProcessEvent, ProcessResult, SourceReport};
use crate::sizes::SizeSpec;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a single progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::SourceAccepted {
            path,
            width,
            height,
        } => vec![format!("Source: {} ({}x{})", path, width, height)],
        ProcessEvent::SourceCropped {
            width,
            height,
            rect,
        } => vec![format!(
            "Warning: source is not square ({}x{}); using centered {}x{} region at ({}, {})",
            width, height, rect.side, rect.side, rect.x, rect.y
        )],
        ProcessEvent::FilterOverridden {
            file_name,
            pixels,
            source_side,
            requested,
        } => vec![format!(
            "Note: {} ({}px) upscales the {}px source; using lanczos3 instead of the {} filter",
            file_name, pixels, source_side, requested
        )],
        ProcessEvent::IconWritten {
            index,
            file_name,
            pixels,
            filter,
        } => vec![format!(
            "{} Created: {} ({}x{}, {})",
            format_index(*index),
            file_name,
            pixels,
            pixels,
            filter.name()
        )],
        ProcessEvent::ManifestWritten { path, entries } => {
            vec![format!("Manifest: {} ({} entries)", path, entries)]
        }
    }
}

/// Closing summary after a successful run.
///
/// `catalog_dir` is passed separately so the caller can show an absolute path.
pub fn format_summary(result: &ProcessResult, catalog_dir: &Path) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "Generated {} icons in {}",
            result.icons.len(),
            catalog_dir.display()
        ),
    ]
}

pub fn print_summary(result: &ProcessResult) {
    let shown = std::path::absolute(&result.catalog_dir).unwrap_or(result.catalog_dir.clone());
    for line in format_summary(result, &shown) {
        println!("{}", line);
    }
}

/// Describe a validated source for the `check` command.
pub fn format_check_output(input: &Path, report: &SourceReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Source: {} ({}x{})",
        input.display(),
        report.width,
        report.height
    )];
    if report.needs_crop {
        lines.push(format!(
            "    Crop: centered {}x{} region at ({}, {})",
            report.crop.side, report.crop.side, report.crop.x, report.crop.y
        ));
    } else {
        lines.push("    Crop: none (square)".to_string());
    }
    if report.needs_upscale {
        lines.push(format!(
            "    Upscale: icons above {}px are enlarged with lanczos3",
            report.crop.side
        ));
    } else {
        lines.push("    Upscale: none".to_string());
    }
    lines
}

pub fn print_check_output(input: &Path, report: &SourceReport) {
    for line in format_check_output(input, report) {
        println!("{}", line);
    }
}

/// Tabulate the size table for the `sizes` command.
pub fn format_size_table(specs: &[SizeSpec]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<14} {:<10} {:<6} {:<7} {}",
        "idiom", "size", "scale", "pixels", "usage"
    )];
    for spec in specs {
        lines.push(format!(
            "{:<14} {:<10} {:<6} {:<7} {}",
            spec.idiom.as_str(),
            size_label(spec),
            scale_label(spec),
            spec.pixels(),
            spec.usage.label()
        ));
    }
    lines
}

pub fn print_size_table(specs: &[SizeSpec]) {
    for line in format_size_table(specs) {
        println!("{}", line);
    }
}
