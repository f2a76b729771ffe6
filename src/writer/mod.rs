// Per-file-type metadata writers

pub mod image;
pub mod video;

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Copy a source file into the mirrored output tree, creating parent
/// directories on the way. Preserves the source modification time.
pub(crate) fn copy_to_destination(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::copy(source, dest)?;

    if let Ok(meta) = fs::metadata(source) {
        if let Ok(modified) = meta.modified() {
            let _ = filetime::set_file_mtime(dest, filetime::FileTime::from_system_time(modified));
        }
    }

    Ok(())
}

/// Drop a destination file left behind by a failed write so the output tree
/// only ever contains successfully updated files.
pub(crate) fn discard_destination(dest: &Path) {
    let _ = fs::remove_file(dest);
}
