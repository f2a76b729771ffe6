// Batch pipeline tests

use super::*;
use std::path::Path;
use tempfile::TempDir;

/// Write a small but real JPEG so the metadata embed has a valid container.
fn create_jpeg(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::from_pixel(8, 8, image::Rgb([64, 128, 192]))
        .save(path)
        .unwrap();
}

fn create_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// True if `haystack` contains `needle` as a byte subsequence.
fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

// ---------------------------------------------------------------
// Test 1: End-to-end live run -- one image with a sidecar is
//         mirrored and tagged, one video without one is skipped
// ---------------------------------------------------------------
#[test]
fn test_live_run_mirrors_updated_files_only() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("takeout");
    let output = tmp.path().join("takeout-exif");

    create_jpeg(&source.join("trip/a.jpg"));
    create_file(
        &source.join("trip/a.jpg.json"),
        br#"{"photoTakenTime": {"timestamp": "1700000000"}, "title": "Trip"}"#,
    );
    create_file(&source.join("b.mp4"), b"not really a video");

    let summary = run_batch(&source, &output, false).unwrap();

    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.errors, 0);

    // Mirrored path for the updated image, nothing for the skipped video
    let dest = output.join("trip/a.jpg");
    assert!(dest.exists(), "updated image should be mirrored");
    assert!(!output.join("b.mp4").exists(), "skipped file must not be copied");

    // Title tag is stored as UTF-16LE ("Trip"), date tags carry the local
    // rendering of the epoch (Nov 2023 in every timezone)
    let bytes = std::fs::read(&dest).unwrap();
    let title_utf16 = [0x54, 0x00, 0x72, 0x00, 0x69, 0x00, 0x70, 0x00];
    assert!(
        contains_bytes(&bytes, &title_utf16),
        "title tag should be populated"
    );
    assert!(
        contains_bytes(&bytes, b"2023:11:1"),
        "date tags should carry the sidecar timestamp"
    );

    // Still a decodable image
    assert!(image::open(&dest).is_ok(), "output must stay a valid JPEG");
}

// ---------------------------------------------------------------
// Test 2: A malformed sidecar is a per-file error; the batch
//         continues and later files still update
// ---------------------------------------------------------------
#[test]
fn test_bad_sidecar_does_not_stop_the_batch() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("src");
    let output = tmp.path().join("src-exif");

    create_jpeg(&source.join("a.jpg"));
    create_file(&source.join("a.jpg.json"), br#"{bad"#);
    create_jpeg(&source.join("z.jpg"));
    create_file(&source.join("z.jpg.json"), br#"{"title": "Ok"}"#);

    let summary = run_batch(&source, &output, false).unwrap();

    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.errors, 1);

    assert!(!output.join("a.jpg").exists(), "errored file must not be copied");
    assert!(output.join("z.jpg").exists());
}

// ---------------------------------------------------------------
// Test 3: No sidecar anywhere -- everything skips and the output
//         tree is never created
// ---------------------------------------------------------------
#[test]
fn test_all_skipped_creates_no_output_tree() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("src");
    let output = tmp.path().join("src-exif");

    create_file(&source.join("clip.mp4"), b"bytes");
    create_jpeg(&source.join("photo.jpg"));

    let summary = run_batch(&source, &output, false).unwrap();

    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.updated, 0);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.errors, 0);
    assert!(!output.exists(), "no writes means no output directory");
}

// ---------------------------------------------------------------
// Test 4: Dry-run reports the same outcomes as a live run but
//         never writes anything
// ---------------------------------------------------------------
#[test]
fn test_dry_run_counts_without_writing() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("takeout");
    let output = tmp.path().join("takeout-exif");

    create_jpeg(&source.join("trip/a.jpg"));
    create_file(
        &source.join("trip/a.jpg.json"),
        br#"{"photoTakenTime": {"timestamp": 1700000000}, "title": "Trip"}"#,
    );
    create_file(&source.join("b.mp4"), b"not really a video");
    create_jpeg(&source.join("c.jpg"));
    create_file(&source.join("c.jpg.json"), br#"{bad"#);

    let summary = run_batch(&source, &output, true).unwrap();

    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.errors, 1);
    assert!(!output.exists(), "dry-run must never create the output directory");
}

// ---------------------------------------------------------------
// Test 5: Unsupported extensions are never enumerated -- they do
//         not appear in any count
// ---------------------------------------------------------------
#[test]
fn test_unsupported_extensions_not_counted() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("src");
    let output = tmp.path().join("src-exif");

    create_file(&source.join("notes.txt"), b"text");
    create_file(&source.join("archive.zip"), b"zip");
    create_file(&source.join("photo.jpg.json"), br#"{"title": "orphan sidecar"}"#);

    let summary = run_batch(&source, &output, false).unwrap();

    assert_eq!(summary.total_files, 0);
    assert_eq!(summary.updated, 0);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.errors, 0);
}

// ---------------------------------------------------------------
// Test 6: Video with a sidecar but no usable exiftool -- counted
//         as an error, and no file lands in the output tree
// ---------------------------------------------------------------
#[test]
fn test_video_without_exiftool_is_error_outcome() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("src");
    let output = tmp.path().join("src-exif");

    create_file(&source.join("d.mp4"), b"not really a video");
    create_file(
        &source.join("d.mp4.json"),
        br#"{"dateTime": "2019:07:04 12:00:00", "make": "Acme"}"#,
    );

    // Point the resolver at a file that exists but cannot execute, so the
    // capability probe fails deterministically even when the machine has a
    // real exiftool on PATH.
    let bogus_tool = tmp.path().join("not-exiftool");
    create_file(&bogus_tool, b"plain data");
    std::env::set_var("EXIF_MIRROR_EXIFTOOL_PATH", &bogus_tool);

    let summary = run_batch(&source, &output, false).unwrap();

    std::env::remove_var("EXIF_MIRROR_EXIFTOOL_PATH");

    assert_eq!(summary.total_files, 1);
    assert_eq!(summary.updated, 0);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.errors, 1);
    assert!(
        !output.join("d.mp4").exists(),
        "errored video must not remain in the output tree"
    );
}
