use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("image decode error: {0}")]
    Decode(String),
}

/// Extensions accepted for ingestion, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|s| *s == ext)
        })
        .unwrap_or(false)
}

pub struct LoadedPhoto {
    pub image: image::RgbImage,
    pub source: PathBuf,
}

pub mod photo;
