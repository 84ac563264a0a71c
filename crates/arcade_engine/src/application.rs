//! Game trait and lifecycle types

use crate::input::{InputState, KeyCode};
use crate::render::Surface;
use thiserror::Error;

/// Game lifecycle trait
///
/// Implement this trait to run a game under the engine's host loop. The
/// engine calls [`Game::update`] once per fixed simulation tick and
/// [`Game::draw`] once per rendered frame, never concurrently.
pub trait Game {
    /// Advance the simulation by exactly one tick
    ///
    /// # Arguments
    /// * `input` - Key state sampled for this tick
    fn update(&mut self, input: &dyn InputState) -> Result<(), AppError>;

    /// Render the current state
    fn draw(&self, surface: &mut dyn Surface);

    /// Logical screen size for the given outer window size
    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}

/// Host events fed into the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Window close requested
    WindowCloseRequested,

    /// Window lost focus; held keys are released
    WindowUnfocused,

    /// Key was pressed
    KeyPressed(KeyCode),

    /// Key was released
    KeyReleased(KeyCode),
}
