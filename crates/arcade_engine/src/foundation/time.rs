//! Time management utilities
//!
//! Simulation time is counted in fixed ticks. [`TickTimer`] is the
//! gameplay countdown, [`FixedTimestep`] converts wall-clock time into
//! ticks for the host loop, and [`Stopwatch`] measures real time.

use std::time::{Duration, Instant};

/// Tick-based countdown driven by a fixed simulation rate
///
/// The timer saturates at its target: once ready it stays ready until
/// [`TickTimer::reset`] is called. Call [`TickTimer::update`] exactly once
/// per simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    elapsed_ticks: u64,
    target_ticks: u64,
}

impl TickTimer {
    /// Create a timer lasting `duration` at `ticks_per_second`
    ///
    /// The target is `floor(duration_ms * ticks_per_second / 1000)`.
    pub fn new(duration: Duration, ticks_per_second: u32) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self {
            elapsed_ticks: 0,
            target_ticks: millis.saturating_mul(u64::from(ticks_per_second)) / 1000,
        }
    }

    /// Create a timer from a duration in milliseconds
    pub fn from_millis(millis: u64, ticks_per_second: u32) -> Self {
        Self::new(Duration::from_millis(millis), ticks_per_second)
    }

    /// Advance by one tick (no-op once ready)
    pub fn update(&mut self) {
        if self.elapsed_ticks < self.target_ticks {
            self.elapsed_ticks += 1;
        }
    }

    /// Whether the countdown has completed
    pub fn is_ready(&self) -> bool {
        self.elapsed_ticks >= self.target_ticks
    }

    /// Restart the countdown
    pub fn reset(&mut self) {
        self.elapsed_ticks = 0;
    }

    /// Ticks counted since the last reset
    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    /// Ticks needed to become ready
    pub fn target_ticks(&self) -> u64 {
        self.target_ticks
    }
}

/// Accumulator that turns elapsed wall-clock time into whole simulation ticks
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick_duration: Duration,
    accumulator: Duration,
    max_ticks_per_frame: u32,
}

impl FixedTimestep {
    /// Create a fixed step running at `ticks_per_second`
    ///
    /// `max_ticks_per_frame` caps how far a single frame may catch up;
    /// any backlog beyond it is dropped.
    pub fn new(ticks_per_second: u32, max_ticks_per_frame: u32) -> Self {
        Self {
            tick_duration: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
        }
    }

    /// Length of one tick
    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Add `delta` of real time and return how many ticks to simulate now
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.accumulator += delta;

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }

        if ticks == self.max_ticks_per_frame && self.accumulator >= self.tick_duration {
            log::warn!(
                "Simulation fell behind, dropping {:?} of backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        ticks
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self { start_time: None }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start (or restart) the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Time since the last start, zero if never started
    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |start| start.elapsed())
    }
}
