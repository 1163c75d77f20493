/// Reel strip loader
///
/// Reads an image file from disk and decodes it into RGBA pixels ready to be
/// painted by iced. The natural size is returned alongside the handle so the
/// session can derive reel geometry once decoding completes.

use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use thiserror::Error;
use tokio::task;

/// File extensions offered by the strip picker
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];

/// Errors that make a strip unreadable
///
/// Sources are flattened to strings so the error can travel inside an iced `Message`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("could not read {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("unreadable image: {0}")]
    Decode(String),

    #[error("decode task failed: {0}")]
    Task(String),
}

/// A decoded strip image
#[derive(Debug, Clone)]
pub struct DecodedStrip {
    /// Where the strip was loaded from
    pub path: PathBuf,
    /// Natural width in pixels (all three reels)
    pub width: u32,
    /// Natural height in pixels (one full band)
    pub height: u32,
    /// Paintable RGBA handle
    pub handle: Handle,
}

/// Check the extension against the picker filter (case-insensitive)
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Load and decode a strip image
///
/// The file is read asynchronously, then decoded on a blocking thread
/// because image decoding is CPU-bound.
pub async fn load_strip(path: PathBuf) -> Result<DecodedStrip, LoadError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| LoadError::Io {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    task::spawn_blocking(move || decode_strip(path, &bytes))
        .await
        .map_err(|e| LoadError::Task(e.to_string()))?
}

/// Blocking decode of already-read bytes
fn decode_strip(path: PathBuf, bytes: &[u8]) -> Result<DecodedStrip, LoadError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();

    log::info!("📷 Decoded reel strip {}: {}x{}", path.display(), width, height);

    Ok(DecodedStrip {
        path,
        width,
        height,
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
    })
}
