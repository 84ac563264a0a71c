//! # Arcade Engine
//!
//! A small fixed-tick 2D engine core for sprite-based arcade games.
//!
//! ## Features
//!
//! - **Fixed-Tick Simulation**: tick timers and a fixed-step host loop
//! - **2D Math**: `nalgebra` vectors and affine transforms in screen space
//! - **Colliders**: closed-interval axis-aligned boxes
//! - **Assets**: PNG sprites and fonts loaded once at startup
//! - **Headless Rendering**: a `Surface` trait with a command-recording backend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct MyGame;
//!
//! impl Game for MyGame {
//!     fn update(&mut self, input: &dyn InputState) -> Result<(), AppError> {
//!         // Update game logic
//!         Ok(())
//!     }
//!
//!     fn draw(&self, surface: &mut dyn Surface) {
//!         // Draw sprites and text
//!     }
//!
//!     fn layout(&self, _width: u32, _height: u32) -> (u32, u32) {
//!         (800, 600)
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     Engine::run(config, &mut MyGame, |_engine| {})?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod assets;
pub mod config;
pub mod render;
pub mod input;
pub mod physics;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Game};
pub use engine::{Engine, EngineConfig, EngineError, RunSummary};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, AppEvent, Game,
        Engine, EngineConfig, EngineError, RunSummary,
        foundation::{
            math::{Transform2D, Vec2},
            time::{FixedTimestep, Stopwatch, TickTimer},
        },
        assets::{AssetError, FontFace, Sprite, SpriteHandle},
        config::{Config, ConfigError},
        render::{Color, DrawImageOptions, RecordingSurface, Surface},
        input::{InputManager, InputState, KeyCode},
        physics::Aabb,
    };
}
