//! Pausable interval timers
//!
//! Spawning and the flap animation run on explicit interval timers that are
//! advanced from inside the tick. Pausing freezes accumulation without
//! losing the partial cycle.

/// Fires every `interval` seconds of advanced time. Intervals are
/// strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    interval: f32,
    elapsed: f32,
    paused: bool,
}

impl IntervalTimer {
    pub fn new(interval: f32) -> Self {
        debug_assert!(interval > 0.0, "interval must be positive");
        Self {
            interval,
            elapsed: 0.0,
            paused: false,
        }
    }

    /// Advance by dt, returning how many complete intervals elapsed
    pub fn advance(&mut self, dt: f32) -> u32 {
        debug_assert!(dt.is_finite(), "dt must be finite");
        if self.paused {
            return 0;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return 0;
        }
        let fires = (self.elapsed / self.interval) as u32;
        self.elapsed -= fires as f32 * self.interval;
        fires
    }

    /// Retune the firing interval. Time already accumulated counts toward
    /// the new interval, so the change applies to the cycle in progress.
    pub fn set_interval(&mut self, interval: f32) {
        debug_assert!(interval > 0.0, "interval must be positive");
        self.interval = interval;
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Freeze accumulation
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
