// Video metadata writer backed by the external exiftool binary
//
// The source is copied verbatim to the destination first; exiftool then
// rewrites the copy in place (-overwrite_original, no backup file).

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::constants::{EXIFTOOL_POLL_INTERVAL_MS, EXIFTOOL_TIMEOUT_SECS};
use crate::error::{ExifMirrorError, Result};
use crate::metadata::NormalizedMetadata;

/// Copy `source` to `dest` and apply `meta` through exiftool.
/// `exiftool` is the capability probed once per run by the caller.
pub fn write_video_metadata(
    source: &Path,
    dest: &Path,
    meta: &NormalizedMetadata,
    exiftool: &Path,
) -> Result<()> {
    super::copy_to_destination(source, dest)?;

    let args = build_tag_args(meta);

    if let Err(e) = run_exiftool(exiftool, &args, dest) {
        super::discard_destination(dest);
        return Err(e);
    }

    Ok(())
}

/// Build -Tag=value arguments from the fields present in the record.
fn build_tag_args(meta: &NormalizedMetadata) -> Vec<String> {
    let mut args = vec!["-overwrite_original".to_string()];

    if let Some(ref date_time) = meta.date_time {
        args.push(format!("-CreateDate={}", date_time));
        args.push(format!("-ModifyDate={}", date_time));
    }

    if let Some(ref description) = meta.description {
        args.push(format!("-Description={}", description));
    }

    if let Some(ref make) = meta.make {
        args.push(format!("-Make={}", make));
    }

    if let Some(ref model) = meta.model {
        args.push(format!("-Model={}", model));
    }

    if let (Some(lat), Some(lon)) = (&meta.gps_latitude, &meta.gps_longitude) {
        args.push(format!("-GPSLatitude={}", lat));
        args.push(format!("-GPSLongitude={}", lon));
    }

    args
}

/// Run exiftool against `target`, polling with a deadline.
/// A timeout kills the child; non-zero exit surfaces the captured stderr.
fn run_exiftool(exiftool: &Path, args: &[String], target: &Path) -> Result<()> {
    let mut child = Command::new(exiftool)
        .args(args)
        .arg(target)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ExifMirrorError::ExifTool(format!("failed to run exiftool: {}", e)))?;

    let deadline = Instant::now() + Duration::from_secs(EXIFTOOL_TIMEOUT_SECS);
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ExifMirrorError::ExifTool(format!(
                        "exiftool timed out after {}s on {}",
                        EXIFTOOL_TIMEOUT_SECS,
                        target.display()
                    )));
                }
                thread::sleep(Duration::from_millis(EXIFTOOL_POLL_INTERVAL_MS));
            }
            Err(e) => {
                return Err(ExifMirrorError::ExifTool(format!(
                    "failed to wait for exiftool: {}",
                    e
                )));
            }
        }
    };

    let mut stderr_text = String::new();
    if let Some(mut stderr) = child.stderr.take() {
        let _ = stderr.read_to_string(&mut stderr_text);
    }

    if !status.success() {
        return Err(ExifMirrorError::ExifTool(format!(
            "exiftool exited with {} on {}: {}",
            status.code().unwrap_or(-1),
            target.display(),
            stderr_text.trim()
        )));
    }

    Ok(())
}
