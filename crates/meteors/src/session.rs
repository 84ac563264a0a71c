//! Glue between the engine's host loop and the world

use arcade_engine::input::InputState;
use arcade_engine::render::Surface;
use arcade_engine::{AppError, Game};

use crate::assets::GameAssets;
use crate::config::GameConfig;
use crate::controls::KeyBindings;
use crate::error::GameError;
use crate::world::World;

/// A running game: the world plus the keys that drive it
#[derive(Debug)]
pub struct GameSession {
    world: World,
    bindings: KeyBindings,
    logical_size: (u32, u32),
}

impl GameSession {
    /// Build a session from a validated config and loaded assets
    pub fn new(config: &GameConfig, assets: GameAssets) -> Result<Self, GameError> {
        config.validate()?;
        let bindings = KeyBindings::from_config(&config.controls)?;
        Ok(Self::with_world(World::new(config, assets), bindings, config))
    }

    /// Wrap an existing world
    pub fn with_world(world: World, bindings: KeyBindings, config: &GameConfig) -> Self {
        Self {
            world,
            bindings,
            logical_size: (config.screen.width, config.screen.height),
        }
    }

    /// The simulated world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Active key bindings
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

impl Game for GameSession {
    fn update(&mut self, input: &dyn InputState) -> Result<(), AppError> {
        let controls = self.bindings.sample(input);
        self.world.update(controls);
        Ok(())
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.world.draw(surface);
    }

    fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        self.logical_size
    }
}
