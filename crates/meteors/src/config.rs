//! Game configuration
//!
//! Every tunable has a default matching the shipped game, so an empty or
//! missing config file plays the standard rules.

use arcade_engine::config::{Config, ConfigError};
use arcade_engine::foundation::math::constants::PI;
use arcade_engine::EngineConfig;
use serde::{Deserialize, Serialize};

/// Top-level game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Logical screen settings
    pub screen: ScreenConfig,

    /// Key bindings
    pub controls: ControlsConfig,

    /// Asset locations
    pub assets: AssetsConfig,

    /// Host loop settings
    pub engine: RunConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Fixed simulation rate
    pub ticks_per_second: u32,

    /// Time between meteor spawns (milliseconds)
    pub meteor_spawn_interval_ms: u64,

    /// Time between shots while fire is held (milliseconds)
    pub fire_cooldown_ms: u64,

    /// Bullet speed (pixels per second)
    pub bullet_speed: f64,

    /// Ship turn rate (radians per second)
    pub turn_rate: f64,

    /// Distance ahead of the ship's center where bullets appear
    pub bullet_spawn_offset: f64,

    /// Slowest meteor speed (pixels per tick, inclusive)
    pub meteor_speed_min: f64,

    /// Fastest meteor speed (pixels per tick, exclusive)
    pub meteor_speed_max: f64,

    /// Largest meteor spin (radians per tick, either direction)
    pub meteor_rotation_speed_max: f64,

    /// Remove bullets once they are fully off screen
    pub cull_offscreen_bullets: bool,

    /// Seed for meteor spawns; random when unset
    pub seed: Option<u64>,
}

/// Logical screen configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Logical width in pixels
    pub width: u32,

    /// Logical height in pixels
    pub height: u32,
}

/// Controls configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Rotate counter-clockwise
    pub rotate_left: String,

    /// Rotate clockwise
    pub rotate_right: String,

    /// Fire
    pub fire: String,
}

/// Asset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding `player.png`, `meteors/`, `lasers/` and `font.ttf`;
    /// the built-in sprite set is used when unset
    pub directory: Option<String>,

    /// Score font size in pixels
    pub font_size: f32,
}

/// Host loop configuration for the binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Stop after this many ticks; unlimited when unset
    pub max_ticks: Option<u64>,

    /// Pace the simulation against the wall clock
    pub real_time: bool,

    /// Default log filter (overridden by `RUST_LOG`)
    pub log_level: String,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            meteor_spawn_interval_ms: 5000,
            fire_cooldown_ms: 1000,
            bullet_speed: 350.0,
            turn_rate: PI,
            bullet_spawn_offset: 50.0,
            meteor_speed_min: 0.25,
            meteor_speed_max: 1.75,
            meteor_rotation_speed_max: 0.02,
            cull_offscreen_bullets: true,
            seed: None,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotate_left: "A".to_string(),
            rotate_right: "D".to_string(),
            fire: "Space".to_string(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            directory: None,
            font_size: 48.0,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_ticks: Some(60 * 60),
            real_time: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gameplay = &self.gameplay;
        if gameplay.ticks_per_second == 0 {
            return Err(ConfigError::Invalid("ticks_per_second must be at least 1".to_string()));
        }
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size {}x{} is empty",
                self.screen.width, self.screen.height
            )));
        }
        let speed_range_ok = gameplay.meteor_speed_min > 0.0
            && gameplay.meteor_speed_min < gameplay.meteor_speed_max;
        if !speed_range_ok {
            return Err(ConfigError::Invalid(format!(
                "meteor speed range [{}, {}) is empty or not positive",
                gameplay.meteor_speed_min, gameplay.meteor_speed_max
            )));
        }
        if gameplay.meteor_rotation_speed_max < 0.0 {
            return Err(ConfigError::Invalid(
                "meteor_rotation_speed_max must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Host loop settings derived from this config
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            ticks_per_second: self.gameplay.ticks_per_second,
            max_ticks: self.engine.max_ticks,
            real_time: self.engine.real_time,
            window_width: self.screen.width,
            window_height: self.screen.height,
            ..EngineConfig::default()
        }
    }

    /// Screen width as a float
    pub fn screen_width(&self) -> f64 {
        f64::from(self.screen.width)
    }

    /// Screen height as a float
    pub fn screen_height(&self) -> f64 {
        f64::from(self.screen.height)
    }
}
