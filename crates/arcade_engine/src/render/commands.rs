//! Draw command recording
//!
//! [`RecordingSurface`] turns every draw call into a [`DrawCommand`] so a
//! frame can be inspected, replayed by a real backend, or asserted on.

use super::{Color, DrawImageOptions, Surface};
use crate::assets::{FontFace, SpriteHandle};
use crate::foundation::math::{Transform2D, Vec2};

/// A single recorded draw call
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// An image drawn with a transform
    Image {
        /// The sprite drawn
        sprite: SpriteHandle,
        /// Image-to-screen transform
        transform: Transform2D,
    },

    /// A string of text
    Text {
        /// Text content
        text: String,
        /// Name of the font face used
        font: String,
        /// Pixel size of the face
        size: f32,
        /// Horizontal advance of the whole string
        width: f32,
        /// Baseline origin
        position: Vec2,
        /// Fill color
        color: Color,
    },
}

impl DrawCommand {
    /// Screen position of an image's top-left pixel, or the text origin
    pub fn origin(&self) -> Vec2 {
        match self {
            Self::Image { transform, .. } => transform.transform_point(Vec2::zeros()),
            Self::Text { position, .. } => *position,
        }
    }
}

/// Headless surface that records draw calls in submission order
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded commands (call between frames)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been drawn
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Names of the sprites drawn, in order
    pub fn images(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Image { sprite, .. } => Some(sprite.name()),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }

    /// Text strings drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Image { .. } => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_image(&mut self, sprite: &SpriteHandle, options: &DrawImageOptions) {
        self.commands.push(DrawCommand::Image {
            sprite: SpriteHandle::clone(sprite),
            transform: options.transform,
        });
    }

    fn draw_text(&mut self, text: &str, font: &FontFace, position: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            font: font.name().to_string(),
            size: font.size(),
            width: font.text_width(text),
            position,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Sprite;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        let ship = Sprite::solid("ship", 4, 4, [255; 4]);
        let rock = Sprite::solid("rock", 8, 8, [128; 4]);
        let font = FontFace::builtin(12.0);

        surface.draw_image(&ship, &DrawImageOptions::default());
        surface.draw_image(
            &rock,
            &DrawImageOptions::with_transform(Transform2D::identity().translate(5.0, 6.0)),
        );
        surface.draw_text("000001", &font, Vec2::new(300.0, 50.0), Color::WHITE);

        assert_eq!(surface.len(), 3);
        assert_eq!(surface.images(), vec!["ship", "rock"]);
        assert_eq!(surface.texts(), vec!["000001"]);
        assert_eq!(surface.commands()[1].origin(), Vec2::new(5.0, 6.0));
        assert_eq!(surface.commands()[2].origin(), Vec2::new(300.0, 50.0));
        let DrawCommand::Text { size, width, .. } = &surface.commands()[2] else {
            panic!("expected a text command");
        };
        assert!((size - 12.0).abs() < f32::EPSILON);
        assert!((width - 36.0).abs() < f32::EPSILON);

        surface.clear();
        assert!(surface.is_empty());
    }
}
