// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module decodes image files and converts them to RGBA pixel data
//! suitable for display in egui.

use crate::error::{CaptionError, Result};
use std::path::{Path, PathBuf};

/// Decoded image ready to be uploaded as a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Path of `name` inside the image directory.
pub fn image_path(image_dir: &Path, name: &str) -> PathBuf {
    image_dir.join(name)
}

/// Load the image `name` from `image_dir`.
///
/// Returns `Ok(None)` when the file does not exist; a present but
/// undecodable file is an error.
pub fn load_image(image_dir: &Path, name: &str) -> Result<Option<LoadedImage>> {
    let path = image_path(image_dir, name);
    if !path.is_file() {
        log::warn!("Image not found: {}", path.display());
        return Ok(None);
    }

    let decoded = image::open(&path).map_err(|source| CaptionError::Image {
        path: path.clone(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Decoded {} ({}x{})", path.display(), width, height);

    Ok(Some(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_image_is_none() {
        let dir = tempdir().unwrap();
        assert!(load_image(dir.path(), "a.jpg").unwrap().is_none());
    }

    #[test]
    fn test_load_png() {
        let dir = tempdir().unwrap();
        let img = image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]));
        img.save(dir.path().join("a.png")).unwrap();

        let loaded = load_image(dir.path(), "a.png").unwrap().unwrap();
        assert_eq!((loaded.width, loaded.height), (4, 2));
        assert_eq!(loaded.pixels.len(), 4 * 2 * 4);
        assert_eq!(&loaded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_undecodable_image_is_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"not a png").unwrap();
        assert!(matches!(
            load_image(dir.path(), "a.png"),
            Err(CaptionError::Image { .. })
        ));
    }
}
