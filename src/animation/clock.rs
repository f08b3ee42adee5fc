//! Animation clock
//!
//! Accumulates frame time scaled by a speed multiplier. One unit of clock
//! time is one full trip around the path, matching the period of the
//! Fourier reconstruction. The engine only ever sees `phase()`.

/// Default playback speed in cycles per second
pub const DEFAULT_SPEED: f64 = 0.1;

/// Scaled, pausable animation time
#[derive(Clone, Debug)]
pub struct AnimationClock {
    /// Total cycles elapsed
    time: f64,
    /// Cycles per second of wall time
    pub speed: f64,
    pub paused: bool,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl AnimationClock {
    pub fn new(speed: f64) -> Self {
        Self {
            time: 0.0,
            speed,
            paused: false,
        }
    }

    /// Advance by `dt` seconds of wall time
    ///
    /// Returns `true` when this step crossed into a new cycle.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.paused || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        let before = self.completed_cycles();
        self.time += dt * self.speed;
        self.completed_cycles() != before
    }

    /// Position within the current cycle, in [0, 1)
    pub fn phase(&self) -> f64 {
        self.time.rem_euclid(1.0)
    }

    pub fn completed_cycles(&self) -> i64 {
        self.time.floor() as i64
    }

    /// Rewind to the start of the path
    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}
