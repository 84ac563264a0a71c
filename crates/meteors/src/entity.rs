//! Shared entity capability
//!
//! Meteors, bullets and the player all draw a single sprite anchored at its
//! top-left corner and collide with a box of the sprite's size. Per-kind
//! `update` methods stay inherent since each takes different inputs.

use arcade_engine::assets::SpriteHandle;
use arcade_engine::foundation::math::{Transform2D, Vec2};
use arcade_engine::physics::Aabb;
use arcade_engine::render::{DrawImageOptions, Surface};

/// A drawable, collidable sprite in screen space
pub trait Entity {
    /// Sprite drawn for this entity
    fn sprite(&self) -> &SpriteHandle;

    /// Top-left corner of the sprite
    fn position(&self) -> Vec2;

    /// Rotation in radians, clockwise from up
    fn rotation(&self) -> f64;

    /// Unrotated box at `position` with the sprite's pixel size
    ///
    /// The box ignores rotation, so it does not follow the drawn outline of
    /// a turned sprite.
    fn collider(&self) -> Aabb {
        Aabb::from_position_size(self.position(), self.sprite().size())
    }

    /// Draw the sprite rotated about its own center
    fn draw(&self, surface: &mut dyn Surface) {
        let sprite = self.sprite();
        let transform =
            Transform2D::rotated_about(sprite.half_size(), self.rotation(), self.position());
        surface.draw_image(sprite, &DrawImageOptions::with_transform(transform));
    }
}
