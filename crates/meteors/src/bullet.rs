//! Bullets fired by the player

use arcade_engine::assets::SpriteHandle;
use arcade_engine::foundation::math::{heading, Vec2};

use crate::entity::Entity;

/// A bullet flying straight along the heading it was fired with
#[derive(Debug, Clone)]
pub struct Bullet {
    position: Vec2,
    rotation: f64,
    speed: f64,
    sprite: SpriteHandle,
}

impl Bullet {
    /// Create a bullet whose sprite is centered on `center`
    ///
    /// `speed` is in pixels per tick.
    pub fn spawn(center: Vec2, rotation: f64, sprite: SpriteHandle, speed: f64) -> Self {
        Self {
            position: center - sprite.half_size(),
            rotation,
            speed,
            sprite,
        }
    }

    /// Advance one tick along the heading
    pub fn update(&mut self) {
        self.position += heading(self.rotation) * self.speed;
    }

    /// Center of the sprite
    pub fn center(&self) -> Vec2 {
        self.position + self.sprite.half_size()
    }
}

impl Entity for Bullet {
    fn sprite(&self) -> &SpriteHandle {
        &self.sprite
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use arcade_engine::assets::Sprite;
    use arcade_engine::foundation::math::constants::PI;

    fn laser() -> SpriteHandle {
        Sprite::solid("laser", 9, 54, [255; 4])
    }

    #[test]
    fn test_spawn_centers_sprite() {
        let bullet = Bullet::spawn(Vec2::new(100.0, 100.0), 0.0, laser(), 5.0);
        assert_relative_eq!(bullet.position(), Vec2::new(95.5, 73.0));
        assert_relative_eq!(bullet.center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_update_follows_heading() {
        let speed = 350.0 / 60.0;

        let mut up = Bullet::spawn(Vec2::new(0.0, 0.0), 0.0, laser(), speed);
        up.update();
        assert_relative_eq!(up.center(), Vec2::new(0.0, -speed), epsilon = 1e-12);

        let mut right = Bullet::spawn(Vec2::new(0.0, 0.0), PI / 2.0, laser(), speed);
        right.update();
        right.update();
        assert_relative_eq!(right.center(), Vec2::new(2.0 * speed, 0.0), epsilon = 1e-12);
        assert_relative_eq!(right.rotation(), PI / 2.0);
    }
}
