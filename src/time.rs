//! Simulation clock.
//!
//! Provides the single source of truth for simulation time across the scene.
//! The clock can follow the wall clock via [`Clock::tick`] or be stepped by
//! hand with [`Clock::advance`], which keeps tests and headless runs
//! deterministic.
//!
//! # Example
//!
//! ```ignore
//! use cauldron::time::Clock;
//!
//! let mut clock = Clock::new();
//!
//! // In your frame loop:
//! let delta = clock.tick();
//!
//! println!("Elapsed: {:.2}s", clock.elapsed());
//! println!("Delta: {:.4}s", delta);
//! println!("Frame: {}", clock.frame());
//! ```

use std::time::Instant;

/// Monotonic simulation time.
///
/// Elapsed time only grows: negative deltas are treated as zero, and a paused
/// clock reports a zero delta.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Wall-clock instant of the last [`tick`](Clock::tick), if any.
    last_tick: Option<Instant>,
    /// Simulation seconds since start, accumulated in f64 to avoid drift.
    elapsed_secs: f64,
    /// Simulation seconds covered by the last frame.
    delta_secs: f32,
    /// Frames advanced while not paused.
    frame_count: u64,
    /// Whether time is paused.
    paused: bool,
    /// Fixed delta time for deterministic updates (optional).
    fixed_delta: Option<f32>,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f32,
}

impl Clock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self {
            last_tick: None,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            paused: false,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Advance by the wall-clock time since the previous tick.
    ///
    /// The first tick after creation or [`reset`](Clock::reset) covers zero
    /// seconds. Returns the simulation delta.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw_delta = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.advance(raw_delta)
    }

    /// Advance by `raw_delta` seconds, before fixed delta and time scale.
    ///
    /// Returns the simulation delta actually applied.
    pub fn advance(&mut self, raw_delta: f32) -> f32 {
        if self.paused {
            self.delta_secs = 0.0;
            return 0.0;
        }

        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta).max(0.0) * self.time_scale;
        self.elapsed_secs += f64::from(self.delta_secs);
        self.frame_count += 1;
        self.delta_secs
    }

    /// Simulation seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs as f32
    }

    /// Simulation seconds covered by the last frame.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames advanced.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Whether time is currently paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current time scale multiplier.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Pause time progression.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume time progression.
    ///
    /// Wall-clock time spent paused is not replayed on the next tick.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            if self.last_tick.is_some() {
                self.last_tick = Some(Instant::now());
            }
        }
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Use a fixed delta instead of the measured or supplied one.
    ///
    /// Pass `None` to go back to real frame timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Set time scale multiplier.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = half speed (slow motion)
    /// - `2.0` = double speed
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Reset to time zero, keeping fixed delta and time scale.
    pub fn reset(&mut self) {
        self.last_tick = None;
        self.elapsed_secs = 0.0;
        self.delta_secs = 0.0;
        self.frame_count = 0;
        self.paused = false;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
