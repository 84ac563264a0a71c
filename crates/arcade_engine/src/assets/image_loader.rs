//! Image loading utilities for sprite data
//!
//! Decodes PNG files into RGBA8 pixel buffers with the `image` crate.

use std::path::Path;

use crate::assets::AssetError;

/// Decoded image pixels in RGBA8 layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data, row-major
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();
        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        let bytes = std::fs::read(path_ref)?;
        let image = Self::from_bytes(&bytes).map_err(|e| match e {
            AssetError::LoadFailed(msg) => {
                AssetError::LoadFailed(format!("{}: {}", path_ref.display(), msg))
            }
            other => other,
        })?;
        log::debug!("Loaded image {}x{} from {:?}", image.width, image.height, path_ref);
        Ok(image)
    }

    /// Decode an image held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to decode image: {e}")))?;
        Self::from_dynamic(&img)
    }

    fn from_dynamic(img: &image::DynamicImage) -> Result<Self, AssetError> {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::InvalidData(format!(
                "Image has empty dimensions {width}x{height}"
            )));
        }

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Create a solid color image (used for built-in placeholder sprites)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            data: color.repeat(pixel_count),
            width,
            height,
        }
    }
}
