// External tool resolver for exiftool
//
// Resolution order:
// 1) Environment variable override (EXIF_MIRROR_EXIFTOOL_PATH)
// 2) Sidecar binary next to the executable
// 3) PATH fallback

use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Get the directory containing the current executable
fn exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}

/// Resolve an external tool path.
fn resolve_tool(env_key: &str, default_name: &str) -> PathBuf {
    // 1) Check environment variable override
    if let Ok(v) = env::var(env_key) {
        let p = PathBuf::from(&v);
        if p.exists() {
            return p;
        }
    }

    // Add .exe on Windows
    let mut filename = default_name.to_string();
    if cfg!(windows) && !filename.to_lowercase().ends_with(".exe") {
        filename.push_str(".exe");
    }

    // 2) Check sidecar next to executable
    if let Some(dir) = exe_dir() {
        let candidate = dir.join(&filename);
        if candidate.exists() {
            return candidate;
        }
    }

    // 3) Fall back to PATH
    PathBuf::from(default_name)
}

/// Get path to the exiftool binary
pub fn exiftool_path() -> PathBuf {
    resolve_tool("EXIF_MIRROR_EXIFTOOL_PATH", "exiftool")
}

/// Probe the exiftool capability once per run.
/// Returns the resolved path only if the tool runs and exits cleanly.
pub fn detect_exiftool() -> Option<PathBuf> {
    let path = exiftool_path();
    let available = Command::new(&path)
        .arg("-ver")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);

    if available {
        Some(path)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tool_fallback() {
        // Without env var set, should return the default name for PATH lookup
        let path = resolve_tool("EXIF_MIRROR_TEST_NONEXISTENT", "testcmd");
        assert_eq!(path, PathBuf::from("testcmd"));
    }

    #[test]
    fn test_env_override() {
        // Set a temp env var pointing to an existing file
        let temp_dir = std::env::temp_dir();
        let temp_file = temp_dir.join("exif_mirror_test_tool");
        std::fs::write(&temp_file, "test").ok();

        std::env::set_var("EXIF_MIRROR_TEST_TOOL", temp_file.to_str().unwrap());
        let path = resolve_tool("EXIF_MIRROR_TEST_TOOL", "default");
        assert_eq!(path, temp_file);

        // Cleanup
        std::env::remove_var("EXIF_MIRROR_TEST_TOOL");
        std::fs::remove_file(&temp_file).ok();
    }
}
