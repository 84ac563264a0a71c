//! The player's ship

use arcade_engine::assets::SpriteHandle;
use arcade_engine::foundation::math::{constants::rad_to_deg, heading, Vec2};
use arcade_engine::foundation::time::TickTimer;

use crate::bullet::Bullet;
use crate::config::GameplayConfig;
use crate::controls::Controls;
use crate::entity::Entity;
use crate::world::BulletSink;

/// Ship handling and weapon settings
#[derive(Debug, Clone)]
pub struct PlayerParams {
    /// Simulation rate the per-second values are divided by
    pub ticks_per_second: u32,
    /// Radians per second
    pub turn_rate: f64,
    /// Milliseconds between shots
    pub fire_cooldown_ms: u64,
    /// Pixels per second
    pub bullet_speed: f64,
    /// Distance from the ship's center to a new bullet's center
    pub bullet_spawn_offset: f64,
    /// Sprite given to fired bullets
    pub bullet_sprite: SpriteHandle,
}

impl PlayerParams {
    /// Settings from the gameplay config
    pub fn from_config(config: &GameplayConfig, bullet_sprite: SpriteHandle) -> Self {
        Self {
            ticks_per_second: config.ticks_per_second,
            turn_rate: config.turn_rate,
            fire_cooldown_ms: config.fire_cooldown_ms,
            bullet_speed: config.bullet_speed,
            bullet_spawn_offset: config.bullet_spawn_offset,
            bullet_sprite,
        }
    }

    /// Rotation applied per tick while a turn key is held
    pub fn turn_per_tick(&self) -> f64 {
        self.turn_rate / f64::from(self.ticks_per_second.max(1))
    }

    /// Bullet travel per tick
    pub fn bullet_speed_per_tick(&self) -> f64 {
        self.bullet_speed / f64::from(self.ticks_per_second.max(1))
    }
}

/// The ship at the center of the screen
///
/// The player does not hold on to a bullet sink; the owner lends one to each
/// [`Player::update`] call so the ship never borrows the world that owns it.
#[derive(Debug, Clone)]
pub struct Player {
    position: Vec2,
    rotation: f64,
    fire_cooldown: TickTimer,
    sprite: SpriteHandle,
    params: PlayerParams,
}

impl Player {
    /// Top-left corner that puts the sprite's center on the screen center
    pub fn start_position(screen_width: f64, screen_height: f64, sprite: &SpriteHandle) -> Vec2 {
        Vec2::new(screen_width / 2.0, screen_height / 2.0) - sprite.half_size()
    }

    /// A ship at the start pose with a fresh weapon cooldown
    pub fn spawn(
        screen_width: f64,
        screen_height: f64,
        sprite: SpriteHandle,
        params: PlayerParams,
    ) -> Self {
        Self {
            position: Self::start_position(screen_width, screen_height, &sprite),
            rotation: 0.0,
            fire_cooldown: TickTimer::from_millis(params.fire_cooldown_ms, params.ticks_per_second),
            sprite,
            params,
        }
    }

    /// Turn, tick the weapon, and hand any fired bullet to `sink`
    pub fn update(&mut self, controls: Controls, sink: &mut dyn BulletSink) {
        let turn = self.params.turn_per_tick();
        if controls.contains(Controls::ROTATE_LEFT) {
            self.rotation -= turn;
        }
        if controls.contains(Controls::ROTATE_RIGHT) {
            self.rotation += turn;
        }

        self.fire_cooldown.update();
        if self.fire_cooldown.is_ready() && controls.contains(Controls::FIRE) {
            self.fire_cooldown.reset();

            let center = self.position + self.sprite.half_size()
                + heading(self.rotation) * self.params.bullet_spawn_offset;
            log::debug!(
                "Fired bullet from ({:.1}, {:.1}) heading {:.1} deg",
                center.x,
                center.y,
                rad_to_deg(self.rotation)
            );
            sink.add_bullet(Bullet::spawn(
                center,
                self.rotation,
                self.params.bullet_sprite.clone(),
                self.params.bullet_speed_per_tick(),
            ));
        }
    }

    /// Weapon cooldown timer
    pub fn fire_cooldown(&self) -> &TickTimer {
        &self.fire_cooldown
    }
}

impl Entity for Player {
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
    use crate::assets::GameAssets;
    use approx::assert_relative_eq;
    use arcade_engine::foundation::math::constants::PI;

    fn player() -> Player {
        let assets = GameAssets::builtin(48.0);
        let params = PlayerParams::from_config(&GameplayConfig::default(), assets.bullet.clone());
        Player::spawn(800.0, 600.0, assets.player, params)
    }

    #[test]
    fn test_spawn_centered() {
        let player = player();
        assert_relative_eq!(player.position(), Vec2::new(350.5, 262.5));
        assert_eq!(player.rotation(), 0.0);
        assert_eq!(player.fire_cooldown().target_ticks(), 60);
    }

    #[test]
    fn test_turning() {
        let mut player = player();
        let mut bullets: Vec<Bullet> = Vec::new();

        for _ in 0..30 {
            player.update(Controls::ROTATE_RIGHT, &mut bullets);
        }
        assert_relative_eq!(player.rotation(), PI / 2.0, epsilon = 1e-9);

        for _ in 0..60 {
            player.update(Controls::ROTATE_LEFT, &mut bullets);
        }
        assert_relative_eq!(player.rotation(), -PI / 2.0, epsilon = 1e-9);

        player.update(Controls::ROTATE_LEFT | Controls::ROTATE_RIGHT, &mut bullets);
        assert_relative_eq!(player.rotation(), -PI / 2.0, epsilon = 1e-9);
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_fire_waits_for_cooldown() {
        let mut player = player();
        let mut bullets: Vec<Bullet> = Vec::new();

        for _ in 0..59 {
            player.update(Controls::FIRE, &mut bullets);
        }
        assert!(bullets.is_empty());

        player.update(Controls::FIRE, &mut bullets);
        assert_eq!(bullets.len(), 1);
        assert!(!player.fire_cooldown().is_ready());

        // Bullet appears 50px ahead of the ship's center, facing up
        assert_relative_eq!(bullets[0].center(), Vec2::new(400.0, 250.0), epsilon = 1e-9);
        assert_eq!(bullets[0].rotation(), 0.0);
    }

    #[test]
    fn test_ready_cooldown_waits_for_trigger() {
        let mut player = player();
        let mut bullets: Vec<Bullet> = Vec::new();

        for _ in 0..200 {
            player.update(Controls::empty(), &mut bullets);
        }
        assert!(player.fire_cooldown().is_ready());

        player.update(Controls::FIRE, &mut bullets);
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn test_shots_go_to_the_sink_of_that_update() {
        let mut player = player();
        let mut first: Vec<Bullet> = Vec::new();
        let mut second: Vec<Bullet> = Vec::new();

        for _ in 0..60 {
            player.update(Controls::FIRE, &mut first);
        }
        for _ in 0..60 {
            player.update(Controls::FIRE, &mut second);
        }
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_fire_direction_follows_rotation() {
        let mut player = player();
        let mut bullets: Vec<Bullet> = Vec::new();

        // 30 right turns reach a quarter turn, then fire on the cooldown tick
        for tick in 1..=60 {
            let controls = if tick <= 30 {
                Controls::ROTATE_RIGHT
            } else {
                Controls::FIRE
            };
            player.update(controls, &mut bullets);
        }
        assert_eq!(bullets.len(), 1);
        assert_relative_eq!(bullets[0].center(), Vec2::new(450.0, 300.0), epsilon = 1e-9);
    }
}
