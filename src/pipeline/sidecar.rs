// Sidecar JSON resolution
//
// Export pipelines have shipped several sidecar naming conventions over the
// years; candidates are tried in a fixed priority order, first match wins.

use std::path::{Path, PathBuf};

use crate::constants::SIDECAR_SUFFIXES;

/// Locate the companion metadata file for a media file.
/// `None` is a legitimate terminal state for the file, not an error.
pub fn resolve_sidecar(media_path: &Path) -> Option<PathBuf> {
    sidecar_candidates(media_path)
        .into_iter()
        .find(|candidate| candidate.exists())
}

/// Candidate paths in priority order: the three suffixes appended to the
/// full filename, then the original extension replaced by .json.
fn sidecar_candidates(media_path: &Path) -> Vec<PathBuf> {
    let name = match media_path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return Vec::new(),
    };

    let parent = match media_path.parent() {
        Some(p) => p,
        None => return Vec::new(),
    };

    let mut candidates: Vec<PathBuf> = SIDECAR_SUFFIXES
        .iter()
        .map(|suffix| parent.join(format!("{}{}", name, suffix)))
        .collect();

    candidates.push(media_path.with_extension("json"));
    candidates
}
