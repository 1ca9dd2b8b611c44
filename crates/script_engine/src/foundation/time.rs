//! Tick timing utilities

use std::time::{Duration, Instant};

/// Wall-clock timer that counts host ticks
pub struct TickTimer {
    started: Instant,
    last_tick: Instant,
    last_delta: Duration,
    tick_count: u64,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer {
    /// Create a new timer starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            last_delta: Duration::ZERO,
            tick_count: 0,
        }
    }

    /// Record the end of a tick
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.last_delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.tick_count += 1;
    }

    /// Number of ticks recorded so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Duration of the most recent tick
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Seconds since the timer was created
    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Average ticks per second since creation
    pub fn ticks_per_second(&self) -> f64 {
        let elapsed = self.elapsed_secs();
        if elapsed > 0.0 {
            self.tick_count as f64 / elapsed
        } else {
            0.0
        }
    }
}
