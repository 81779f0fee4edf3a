use std::time::Duration;

use crate::time_source::{RealtimeClock, TimeSource};

/// Measures elapsed time across any number of start/stop intervals.
///
/// All readings come from the wrapped [`TimeSource`] and are expressed in its unit, seconds.
/// A tick is one second, the stopwatch is not high resolution.
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch<C: TimeSource = RealtimeClock> {
    clock: C,
    accumulated: f64,
    last_start: f64,
    running: bool,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Stopwatch::new()
    }
}

impl Stopwatch {
    /// Ticks per second.
    pub const FREQUENCY: u64 = 1;
    pub const IS_HIGH_RESOLUTION: bool = false;

    pub fn new() -> Self {
        Self::with_clock(RealtimeClock)
    }

    pub fn start_new() -> Self {
        Self::start_new_with_clock(RealtimeClock)
    }
}

impl<C: TimeSource> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            accumulated: 0.0,
            last_start: 0.0,
            running: false,
        }
    }

    pub fn start_new_with_clock(clock: C) -> Self {
        let mut stopwatch = Self::with_clock(clock);
        stopwatch.start();
        stopwatch
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts or resumes measuring. Does nothing while already running.
    pub fn start(&mut self) {
        if !self.running {
            self.last_start = self.clock.now();
            self.running = true;
        }
    }

    /// Closes the open interval and adds it to the accumulated time. Does nothing while stopped.
    pub fn stop(&mut self) {
        if self.running {
            self.accumulated += self.clock.now() - self.last_start;
            self.running = false;

            // Clocks are allowed to jump backwards.
            if self.accumulated < 0.0 || self.accumulated.is_nan() {
                log::debug!(
                    "Stopwatch interval went negative ({}s), clamping to zero.",
                    self.accumulated
                );
                self.accumulated = 0.0;
            }
        }
    }

    /// Stops measuring and clears the accumulated time.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.last_start = 0.0;
        self.running = false;
    }

    /// Clears the accumulated time and starts measuring a new interval.
    pub fn restart(&mut self) {
        self.accumulated = 0.0;
        self.last_start = self.clock.now();
        self.running = true;
    }

    /// Total elapsed seconds, including the open interval when running.
    ///
    /// The open interval is clamped the same way [`Stopwatch::stop`] clamps it, so this always
    /// equals what a `stop` would record right now and is never negative.
    pub fn elapsed_raw(&self) -> f64 {
        let mut elapsed = self.accumulated;
        if self.running {
            elapsed += self.clock.now() - self.last_start;
        }
        elapsed.max(0.0)
    }

    pub fn elapsed(&self) -> Duration {
        Duration::try_from_secs_f64(self.elapsed_raw()).unwrap_or(Duration::MAX)
    }

    pub fn elapsed_milliseconds(&self) -> f64 {
        self.elapsed_raw() * 1000.0
    }

    pub fn elapsed_ticks(&self) -> f64 {
        self.elapsed_raw()
    }
}
