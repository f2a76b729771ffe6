// Batch processing pipeline

pub mod discover;
pub mod sidecar;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExifMirrorError, Result};
use crate::metadata;
use crate::tools;
use crate::writer;

use discover::{MediaFile, MediaKind};

/// Aggregate outcome counts for one run.
/// Every discovered file lands in exactly one of updated/skipped/errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_files: usize,
    pub updated: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Walk `source_root`, rewrite metadata for every media file with a sidecar,
/// and mirror the updated files under `output_root`.
///
/// Per-file failures are isolated: they are logged, counted, and the batch
/// moves on. Dry-run resolves and decodes but never touches the output tree.
pub fn run_batch(source_root: &Path, output_root: &Path, dry_run: bool) -> Result<RunSummary> {
    let files = discover::discover_media_files(source_root)?;
    log::info!("Found {} media files under {}", files.len(), source_root.display());

    // Probe the external tool once per run; never in dry-run (no writes).
    let exiftool = if dry_run { None } else { tools::detect_exiftool() };

    let mut summary = RunSummary {
        total_files: files.len(),
        ..Default::default()
    };

    for file in &files {
        match process_file(file, source_root, output_root, dry_run, exiftool.as_deref()) {
            Ok(Some(dest)) => {
                summary.updated += 1;
                if dry_run {
                    log::info!(
                        "[dry-run] Would update {} -> {}",
                        file.path.display(),
                        dest.display()
                    );
                } else {
                    log::info!("Updated {} -> {}", file.path.display(), dest.display());
                }
            }
            Ok(None) => {
                summary.skipped += 1;
                log::info!("No sidecar for {}, skipping", file.path.display());
            }
            Err(ExifMirrorError::ExifToolUnavailable(msg)) => {
                summary.errors += 1;
                log::warn!("Cannot update {}: {}", file.path.display(), msg);
            }
            Err(e) => {
                summary.errors += 1;
                log::error!("Failed to process {}: {}", file.path.display(), e);
            }
        }
    }

    Ok(summary)
}

/// Process a single media file.
/// `Ok(Some(dest))` = updated (or would be, in dry-run), `Ok(None)` = no
/// sidecar, `Err` = per-file failure.
fn process_file(
    file: &MediaFile,
    source_root: &Path,
    output_root: &Path,
    dry_run: bool,
    exiftool: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let sidecar_path = match sidecar::resolve_sidecar(&file.path) {
        Some(p) => p,
        None => return Ok(None),
    };

    let meta = metadata::decode_sidecar(&sidecar_path)?;

    let relative = file.path.strip_prefix(source_root).map_err(|_| {
        ExifMirrorError::InvalidPath(format!(
            "{} is not under {}",
            file.path.display(),
            source_root.display()
        ))
    })?;
    let dest = output_root.join(relative);

    if dry_run {
        return Ok(Some(dest));
    }

    match file.kind {
        MediaKind::Image => writer::image::write_image_metadata(&file.path, &dest, &meta)?,
        MediaKind::Video => {
            let tool = exiftool.ok_or_else(|| {
                ExifMirrorError::ExifToolUnavailable(
                    "exiftool not found; install it to update video metadata".to_string(),
                )
            })?;
            writer::video::write_video_metadata(&file.path, &dest, &meta, tool)?;
        }
    }

    Ok(Some(dest))
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
