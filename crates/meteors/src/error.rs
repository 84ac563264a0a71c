//! Top-level game errors

use arcade_engine::assets::AssetError;
use arcade_engine::config::ConfigError;
use arcade_engine::EngineError;
use thiserror::Error;

/// Anything that stops the game from starting or running
#[derive(Error, Debug)]
pub enum GameError {
    /// Bad or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Missing or undecodable assets
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Failure inside the host loop
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}
