//! # Meteors
//!
//! A meteor-defense arcade game on top of `arcade_engine`. The ship sits
//! at the center of the screen, turns and fires; meteors appear on a ring
//! around it and drift inward. Each meteor shot down scores a point, and a
//! meteor reaching the ship starts the game over.
//!
//! ```rust,no_run
//! use arcade_engine::Engine;
//! use meteors::{GameAssets, GameConfig, GameSession};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GameConfig::default();
//!     let mut session = GameSession::new(&config, GameAssets::builtin(48.0))?;
//!     Engine::run(config.engine_config(), &mut session, |_engine| {})?;
//!     println!("score: {}", session.world().score_text());
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod bullet;
pub mod config;
pub mod controls;
pub mod entity;
pub mod error;
pub mod meteor;
pub mod player;
pub mod session;
pub mod world;

pub use assets::GameAssets;
pub use config::GameConfig;
pub use controls::{Controls, KeyBindings};
pub use error::GameError;
pub use session::GameSession;
pub use world::{BulletSink, World};

#[cfg(test)]
mod scenarios;
