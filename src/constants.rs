// exif-mirror Constants

// Image extensions (formats little_exif can embed metadata into)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "tiff", "tif"];

// Video extensions (containers handled through exiftool)
pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "m4v"];

// Sidecar suffixes appended to the full media filename, in priority order.
// A fourth convention (original extension replaced by .json) is tried last.
pub const SIDECAR_SUFFIXES: [&str; 3] = [".suppl.json", ".supplemental-metadata.json", ".json"];

// Output tree naming
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-exif";

// Embedded date-time tags share this format (zero-padded, 24-hour clock)
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

// Windows Explorer tags carried as UTF-16LE byte arrays in IFD0
pub const TAG_XP_TITLE: u16 = 0x9c9b;
pub const TAG_XP_COMMENT: u16 = 0x9c9c;

// External tool invocation
pub const EXIFTOOL_TIMEOUT_SECS: u64 = 120;
pub const EXIFTOOL_POLL_INTERVAL_MS: u64 = 50;
