//! Meteors
//!
//! Runs the game headless with an attract-mode pilot that spins clockwise
//! and keeps the trigger held. Pass a config path as the first argument,
//! otherwise `meteors.toml` in the working directory is used when present.

use std::path::PathBuf;
use std::process::ExitCode;

use arcade_engine::config::Config;
use arcade_engine::foundation::logging;
use arcade_engine::{AppEvent, Engine};
use meteors::{GameAssets, GameConfig, GameError, GameSession};

const DEFAULT_CONFIG: &str = "meteors.toml";

fn main() -> ExitCode {
    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);

    let config = match GameConfig::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            logging::init();
            log::error!("Failed to load {:?}: {}", config_path, e);
            return ExitCode::FAILURE;
        }
    };
    logging::init_with_level(&config.engine.log_level);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &GameConfig) -> Result<(), GameError> {
    config.validate()?;

    let assets = match &config.assets.directory {
        Some(dir) => GameAssets::load(dir, config.assets.font_size)?,
        None => {
            log::info!("No asset directory configured, using built-in sprites");
            GameAssets::builtin(config.assets.font_size)
        }
    };

    let mut session = GameSession::new(config, assets)?;
    let pilot = [session.bindings().rotate_right, session.bindings().fire];

    let summary = Engine::run(config.engine_config(), &mut session, |engine| {
        if engine.frames() == 0 {
            for key in pilot {
                engine.handle_event(AppEvent::KeyPressed(key));
            }
            log::debug!("Attract mode holding {:?}", pilot);
        }
    })?;

    let world = session.world();
    log::info!(
        "Ran {} ticks in {:?}; score {} with {} meteors and {} bullets in play",
        summary.ticks,
        summary.elapsed,
        world.score_text(),
        world.meteors().len(),
        world.bullets().len()
    );
    Ok(())
}
