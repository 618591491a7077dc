//! Linear 8-bit fades

use embassy_time::{Duration, Instant};

use crate::math8::{blend8, progress8};

/// A u8 value that moves linearly towards a target over time
#[derive(Debug, Clone)]
pub struct Fade {
    current: u8,
    from: u8,
    to: u8,
    started: Instant,
    duration: Duration,
}

impl Fade {
    pub const fn new(value: u8) -> Self {
        Self {
            current: value,
            from: value,
            to: value,
            started: Instant::from_millis(0),
            duration: Duration::from_millis(0),
        }
    }

    pub const fn current(&self) -> u8 {
        self.current
    }

    pub const fn target(&self) -> u8 {
        self.to
    }

    pub const fn is_fading(&self) -> bool {
        self.current != self.to
    }

    /// Start fading from the current value to `value`
    ///
    /// A zero duration jumps immediately.
    pub fn start(&mut self, value: u8, duration: Duration, now: Instant) {
        self.from = self.current;
        self.to = value;
        self.started = now;
        self.duration = duration;
        if duration.as_millis() == 0 {
            self.current = value;
        }
    }

    /// Update the current value for `now`
    pub fn tick(&mut self, now: Instant) {
        if !self.is_fading() {
            return;
        }
        let elapsed = Duration::from_millis(
            now.as_millis().saturating_sub(self.started.as_millis()),
        );
        self.current = match progress8(elapsed, self.duration) {
            255 => self.to,
            progress => blend8(self.from, self.to, progress),
        };
    }
}
