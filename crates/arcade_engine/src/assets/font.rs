//! Font loading using the `fontdue` library
//!
//! Glyph rasterization belongs to the rendering host; the engine only
//! parses and validates the font once at startup.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use fontdue::{Font, FontSettings};

use super::AssetError;

/// A font at a fixed pixel size
#[derive(Clone)]
pub struct FontFace {
    name: String,
    size: f32,
    font: Option<Arc<Font>>,
}

impl FontFace {
    /// Parse a TrueType/OpenType font file
    pub fn from_file<P: AsRef<Path>>(path: P, size: f32) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        let name = path
            .file_stem()
            .map_or_else(|| "font".to_string(), |s| s.to_string_lossy().into_owned());
        let face = Self::from_bytes(name, &bytes, size)?;
        log::info!("Loaded font {:?} at {}px", path, size);
        Ok(face)
    }

    /// Parse font data held in memory
    pub fn from_bytes(
        name: impl Into<String>,
        bytes: &[u8],
        size: f32,
    ) -> Result<Self, AssetError> {
        let settings = FontSettings {
            scale: size,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to parse font: {e}")))?;

        Ok(Self {
            name: name.into(),
            size,
            font: Some(Arc::new(font)),
        })
    }

    /// A face with no glyph data; the surface picks its own fallback
    pub fn builtin(size: f32) -> Self {
        Self {
            name: "builtin".to_string(),
            size,
            font: None,
        }
    }

    /// Font name (file stem for loaded fonts)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixel size the face was loaded at
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Horizontal advance of `text` in pixels
    ///
    /// The builtin face has no metrics and assumes half-square glyphs.
    pub fn text_width(&self, text: &str) -> f32 {
        match &self.font {
            Some(font) => text
                .chars()
                .map(|c| font.metrics(c, self.size).advance_width)
                .sum(),
            None => text.chars().count() as f32 * self.size * 0.5,
        }
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("has_glyphs", &self.font.is_some())
            .finish()
    }
}
