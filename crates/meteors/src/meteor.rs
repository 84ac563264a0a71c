//! Meteors drifting in from the spawn ring

use arcade_engine::assets::SpriteHandle;
use arcade_engine::foundation::math::{constants::TAU, direction, Vec2};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GameplayConfig;
use crate::entity::Entity;

/// Random ranges for new meteors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeteorParams {
    /// Slowest speed, pixels per tick (inclusive)
    pub speed_min: f64,
    /// Fastest speed, pixels per tick (exclusive)
    pub speed_max: f64,
    /// Largest spin magnitude, radians per tick
    pub rotation_speed_max: f64,
}

impl Default for MeteorParams {
    fn default() -> Self {
        Self::from_config(&GameplayConfig::default())
    }
}

impl MeteorParams {
    /// Ranges from the gameplay settings
    pub fn from_config(config: &GameplayConfig) -> Self {
        Self {
            speed_min: config.meteor_speed_min,
            speed_max: config.meteor_speed_max,
            rotation_speed_max: config.meteor_rotation_speed_max,
        }
    }
}

/// A meteor moving in a straight line with constant spin
#[derive(Debug, Clone)]
pub struct Meteor {
    position: Vec2,
    movement: Vec2,
    rotation: f64,
    rotation_speed: f64,
    sprite: SpriteHandle,
}

impl Meteor {
    /// Place a meteor explicitly
    pub fn new(position: Vec2, movement: Vec2, rotation_speed: f64, sprite: SpriteHandle) -> Self {
        Self {
            position,
            movement,
            rotation: 0.0,
            rotation_speed,
            sprite,
        }
    }

    /// Spawn a meteor on the ring of radius `screen_width / 2` around the
    /// screen center, heading for the center
    ///
    /// Returns `None` when the sprite pool is empty.
    pub fn spawn<R: Rng + ?Sized>(
        screen_width: f64,
        screen_height: f64,
        sprites: &[SpriteHandle],
        params: &MeteorParams,
        rng: &mut R,
    ) -> Option<Self> {
        let sprite = sprites.choose(rng)?.clone();

        let target = Vec2::new(screen_width / 2.0, screen_height / 2.0);
        let radius = screen_width / 2.0;
        let angle = rng.gen_range(0.0..TAU);
        let position = target + Vec2::new(angle.cos(), angle.sin()) * radius;

        let speed = if params.speed_min < params.speed_max {
            rng.gen_range(params.speed_min..params.speed_max)
        } else {
            params.speed_min
        };
        let movement = if let Some(dir) = direction(position, target) {
            dir * speed
        } else {
            log::warn!("Meteor spawned on its target at {:?}; it will not move", position);
            Vec2::zeros()
        };

        let rotation_speed = if params.rotation_speed_max > 0.0 {
            rng.gen_range(-params.rotation_speed_max..params.rotation_speed_max)
        } else {
            0.0
        };

        log::debug!(
            "Spawned meteor '{}' at ({:.1}, {:.1}) with speed {:.2}",
            sprite.name(),
            position.x,
            position.y,
            speed
        );
        Some(Self::new(position, movement, rotation_speed, sprite))
    }

    /// Advance one tick
    pub fn update(&mut self) {
        self.position += self.movement;
        self.rotation += self.rotation_speed;
    }

    /// Per-tick displacement
    pub fn movement(&self) -> Vec2 {
        self.movement
    }

    /// Per-tick spin
    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }
}

impl Entity for Meteor {
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
