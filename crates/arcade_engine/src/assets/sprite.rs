//! Sprites: named images shared by handle

use std::path::Path;
use std::sync::Arc;

use super::{AssetError, ImageData};
use crate::foundation::math::Vec2;

/// Shared, immutable sprite reference
pub type SpriteHandle = Arc<Sprite>;

/// A named image used as an entity's visual and collider size
#[derive(Debug, PartialEq, Eq)]
pub struct Sprite {
    name: String,
    image: ImageData,
}

impl Sprite {
    /// Wrap decoded image data in a sprite handle
    pub fn new(name: impl Into<String>, image: ImageData) -> SpriteHandle {
        Arc::new(Self {
            name: name.into(),
            image,
        })
    }

    /// Solid-color sprite of the given size
    pub fn solid(name: impl Into<String>, width: u32, height: u32, color: [u8; 4]) -> SpriteHandle {
        Self::new(name, ImageData::solid_color(width, height, color))
    }

    /// Sprite name (file stem for loaded sprites)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in pixels
    pub fn width(&self) -> f64 {
        f64::from(self.image.width)
    }

    /// Height in pixels
    pub fn height(&self) -> f64 {
        f64::from(self.image.height)
    }

    /// Size in pixels as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Half the size; the offset from the top-left corner to the center
    pub fn half_size(&self) -> Vec2 {
        self.size() * 0.5
    }
}

/// Load a single sprite from an image file
pub fn load_sprite<P: AsRef<Path>>(path: P) -> Result<SpriteHandle, AssetError> {
    let path = path.as_ref();
    let image = ImageData::from_file(path)?;
    let name = path
        .file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
    Ok(Sprite::new(name, image))
}

/// Load every `.png` in a directory, in file name order
///
/// An empty directory is an error: callers use the result as a pool to
/// pick from.
pub fn load_sprite_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<SpriteHandle>, AssetError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(AssetError::NotFound(dir.display().to_string()));
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if path.is_file() && is_png {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(AssetError::InvalidData(format!(
            "No sprites found in {}",
            dir.display()
        )));
    }

    let sprites = paths
        .iter()
        .map(load_sprite)
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("Loaded {} sprites from {:?}", sprites.len(), dir);
    Ok(sprites)
}
