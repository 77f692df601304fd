//! I/O helpers for frames and JSON reports used by the command-line tool.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into a [`PixelBuffer`].
//! - `save_pixel_buffer`: write a [`PixelBuffer`] to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::PixelBuffer;
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and expand it to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let (width, height) = img.dimensions();
    PixelBuffer::new(width, height, img.into_raw())
        .map_err(|e| format!("Failed to wrap {}: {e}", path.display()))
}

/// Save an RGBA buffer, creating parent directories as needed.
pub fn save_pixel_buffer(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = RgbaImage::from_raw(buffer.width, buffer.height, buffer.pixels.clone())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
