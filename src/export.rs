//! Writing rendered icons and the manifest to disk.
//!
//! Writes are sequential and stop at the first failure. Files written before
//! the failure stay on disk: names are deterministic, so a re-run simply
//! overwrites them.

use crate::imaging::{IconBackend, RenderedIcon};
use crate::manifest::{MANIFEST_FILE_NAME, Manifest, ManifestEntry};
use crate::process::ProcessEvent;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot write {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },
}

impl ExportError {
    fn write(path: &Path, reason: impl ToString) -> Self {
        ExportError::WriteError {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Write every icon under `catalog_dir`, creating subdirectories as needed.
///
/// When `manifest` is given, one entry is appended per file written.
/// Returns the paths of the written files, in table order.
pub fn export_icons(
    backend: &impl IconBackend,
    icons: &[RenderedIcon],
    catalog_dir: &Path,
    mut manifest: Option<&mut Manifest>,
    events: Option<&Sender<ProcessEvent>>,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(icons.len());

    for (i, icon) in icons.iter().enumerate() {
        let dest = catalog_dir.join(&icon.plan.file_name);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ExportError::write(parent, e))?;
        }
        backend
            .save_png(&icon.image, &dest)
            .map_err(|e| ExportError::write(&dest, e))?;

        if let Some(m) = manifest.as_deref_mut() {
            m.push(ManifestEntry::new(&icon.plan.spec, &icon.plan.file_name));
        }
        if let Some(tx) = events {
            tx.send(ProcessEvent::IconWritten {
                index: i + 1,
                file_name: icon.plan.file_name.clone(),
                pixels: icon.plan.spec.pixels(),
                filter: icon.plan.filter,
            })
            .ok();
        }
        written.push(dest);
    }

    Ok(written)
}

/// Serialize `manifest` as `Contents.json` inside `catalog_dir`.
pub fn write_manifest(manifest: &Manifest, catalog_dir: &Path) -> Result<PathBuf, ExportError> {
    let path = catalog_dir.join(MANIFEST_FILE_NAME);
    let json = manifest.to_json().map_err(|e| ExportError::write(&path, e))?;
    std::fs::create_dir_all(catalog_dir).map_err(|e| ExportError::write(catalog_dir, e))?;
    std::fs::write(&path, json).map_err(|e| ExportError::write(&path, e))?;
    Ok(path)
}
