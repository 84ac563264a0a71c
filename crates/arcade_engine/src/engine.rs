//! Host loop
//!
//! The engine strictly alternates "advance the simulation by whole fixed
//! ticks" and "draw the current state" on one thread. Rendering goes into
//! a [`RecordingSurface`]; a windowed host would present that frame.

use std::time::{Duration, Instant};

use crate::{
    application::{AppError, AppEvent, Game},
    foundation::time::{FixedTimestep, Stopwatch},
    input::InputManager,
    render::RecordingSurface,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed simulation rate
    pub ticks_per_second: u32,

    /// Stop after this many ticks (`None` runs until [`Engine::quit`])
    pub max_ticks: Option<u64>,

    /// Pace ticks against the wall clock instead of running flat out
    pub real_time: bool,

    /// Most ticks one frame may run to catch up in real-time mode
    pub max_ticks_per_frame: u32,

    /// Outer window size reported to [`Game::layout`]
    pub window_width: u32,

    /// Outer window height reported to [`Game::layout`]
    pub window_height: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            max_ticks: None,
            real_time: false,
            max_ticks_per_frame: 5,
            window_width: 800,
            window_height: 600,
        }
    }
}

/// Totals reported when a run finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Simulation ticks executed
    pub ticks: u64,
    /// Frames drawn
    pub frames: u64,
    /// Wall-clock time spent
    pub elapsed: Duration,
}

/// Main engine struct
///
/// Owns the host-side state (input, the draw target, counters) and drives
/// a [`Game`] through the fixed-tick loop.
pub struct Engine {
    /// Input handling system
    pub input: InputManager,

    /// Frame draw target
    surface: RecordingSurface,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,

    ticks: u64,
    frames: u64,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        if config.ticks_per_second == 0 {
            return Err(EngineError::ConfigError(
                "ticks_per_second must be at least 1".to_string(),
            ));
        }

        log::info!(
            "Initializing engine at {} ticks/s{}",
            config.ticks_per_second,
            if config.real_time { " (real time)" } else { "" }
        );

        Ok(Self {
            input: InputManager::new(),
            surface: RecordingSurface::new(),
            config,
            running: true,
            ticks: 0,
            frames: 0,
        })
    }

    /// Run the main loop until `max_ticks` or [`Engine::quit`]
    ///
    /// `on_frame` runs at the start of every frame, before any ticks; the
    /// host uses it to feed input events or request shutdown.
    pub fn run<G, F>(
        config: EngineConfig,
        game: &mut G,
        mut on_frame: F,
    ) -> Result<RunSummary, EngineError>
    where
        G: Game,
        F: FnMut(&mut Self),
    {
        let mut engine = Self::new(config)?;
        let (width, height) = game.layout(engine.config.window_width, engine.config.window_height);
        log::info!("Starting main loop with a {}x{} logical screen", width, height);

        let mut timestep = FixedTimestep::new(
            engine.config.ticks_per_second,
            engine.config.max_ticks_per_frame,
        );
        let stopwatch = Stopwatch::start_new();
        let mut last_frame = Instant::now();

        while engine.running {
            on_frame(&mut engine);
            if !engine.running {
                break;
            }

            let ticks = if engine.config.real_time {
                std::thread::sleep(timestep.tick_duration());
                let now = Instant::now();
                let due = timestep.advance(now - last_frame);
                last_frame = now;
                due
            } else {
                1
            };

            engine.step(game, ticks)?;
        }

        let summary = RunSummary {
            ticks: engine.ticks,
            frames: engine.frames,
            elapsed: stopwatch.elapsed(),
        };
        log::info!(
            "Engine shutdown complete after {} ticks / {} frames in {:?}",
            summary.ticks,
            summary.frames,
            summary.elapsed
        );
        Ok(summary)
    }

    /// Run up to `ticks` simulation ticks, then draw one frame
    ///
    /// Stops early and ends the run once `max_ticks` is reached.
    pub fn step<G: Game>(&mut self, game: &mut G, ticks: u32) -> Result<(), EngineError> {
        for _ in 0..ticks {
            if self.limit_reached() {
                break;
            }
            game.update(&self.input)?;
            self.ticks += 1;
            log::trace!("Tick {}", self.ticks);
        }

        self.surface.clear();
        game.draw(&mut self.surface);
        self.frames += 1;

        if self.limit_reached() {
            self.running = false;
        }
        Ok(())
    }

    fn limit_reached(&self) -> bool {
        self.config.max_ticks.is_some_and(|max| self.ticks >= max)
    }

    /// Handle a host event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WindowCloseRequested => self.quit(),
            AppEvent::WindowUnfocused => self.input.release_all(),
            AppEvent::KeyPressed(key) => self.input.press(key),
            AppEvent::KeyReleased(key) => self.input.release(key),
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// The most recently drawn frame
    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    /// Simulation ticks executed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Application error propagated out of the loop
    #[error("Application error: {0}")]
    ApplicationError(#[from] AppError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
