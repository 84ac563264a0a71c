//! Rendering interface
//!
//! The engine does not own a GPU backend. Games draw into a [`Surface`],
//! which the host implements on top of whatever graphics stack it runs.
//! [`RecordingSurface`] is the headless implementation: it keeps the draw
//! calls as [`DrawCommand`]s for the host loop and for tests.

pub mod commands;

pub use commands::{DrawCommand, RecordingSurface};

use serde::{Deserialize, Serialize};

use crate::assets::{FontFace, SpriteHandle};
use crate::foundation::math::{Transform2D, Vec2};

/// RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Options for drawing an image
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawImageOptions {
    /// Transform from image space (top-left origin, pixels) to screen space
    pub transform: Transform2D,
}

impl DrawImageOptions {
    /// Options with the given transform
    pub fn with_transform(transform: Transform2D) -> Self {
        Self { transform }
    }
}

/// Render target the game draws into
pub trait Surface {
    /// Draw an image with the given transform
    fn draw_image(&mut self, sprite: &SpriteHandle, options: &DrawImageOptions);

    /// Draw a string with its baseline origin at `position`
    fn draw_text(&mut self, text: &str, font: &FontFace, position: Vec2, color: Color);
}
