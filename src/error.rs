// exif-mirror Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExifMirrorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Metadata write error: {0}")]
    Write(String),

    #[error("ExifTool unavailable: {0}")]
    ExifToolUnavailable(String),

    #[error("ExifTool error: {0}")]
    ExifTool(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, ExifMirrorError>;
