//! Asset loading
//!
//! Assets are loaded once at startup into plain owned values and passed
//! into the game explicitly; nothing here keeps global state.
//!
//! - [`ImageData`]: decoded RGBA pixels
//! - [`Sprite`] / [`SpriteHandle`]: a named, immutable, shareable image
//! - [`FontFace`]: a parsed font at a fixed pixel size

pub mod image_loader;
pub mod sprite;
pub mod font;

pub use image_loader::ImageData;
pub use sprite::{load_sprite, load_sprite_dir, Sprite, SpriteHandle};
pub use font::FontFace;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to decode or parse an asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Asset decoded but is unusable
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
