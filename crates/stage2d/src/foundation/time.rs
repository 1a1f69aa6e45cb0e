//! Time measurement for frame loops
//!
//! [`Timer`] measures the wall-clock delta between consecutive ticks;
//! [`Stopwatch`] measures the span since a fixed starting point.

use std::time::{Duration, Instant};

/// Per-tick delta measurement
///
/// Call [`Timer::update`] once per loop iteration, then read
/// [`Timer::delta_time`] for the seconds elapsed since the previous
/// iteration.
pub struct Timer {
    last_tick: Instant,
    delta_time: f32,
    total_time: f32,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a timer; the first `update` measures from this moment
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
        }
    }

    /// Record a tick boundary (call once per loop iteration)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_tick).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_tick = now;
    }

    /// Seconds elapsed between the last two `update` calls
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Total seconds accumulated across all `update` calls
    #[must_use]
    pub fn total_time(&self) -> f32 {
        self.total_time
    }
}

/// Measures elapsed time since it was started
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Create a stopwatch running from this moment
    #[must_use]
    pub fn start_new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Restart measurement from this moment
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Elapsed time since start
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed time since start, in seconds
    #[must_use]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}
