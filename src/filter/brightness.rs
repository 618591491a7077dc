//! Global brightness and power fades
//!
//! Power off fades the output to black but keeps the configured level, power
//! on fades back to it.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Filter;
use crate::{color::Rgb, math8::scale8, transition::Fade};

#[derive(Debug, Clone)]
pub(crate) struct BrightnessFilter {
    /// Configured level, restored on power on
    level: u8,
    power: bool,
    fade: Fade,
    fade_duration: Duration,
}

impl BrightnessFilter {
    pub(crate) const fn new(level: u8, power: bool, fade_duration: Duration) -> Self {
        Self {
            level,
            power,
            fade: Fade::new(if power { level } else { 0 }),
            fade_duration,
        }
    }

    pub(crate) const fn level(&self) -> u8 {
        self.level
    }

    pub(crate) const fn power(&self) -> bool {
        self.power
    }

    pub(crate) fn set_level(&mut self, level: u8, now: Instant) {
        self.level = level;
        if self.power {
            self.fade.start(level, self.fade_duration, now);
        }
    }

    pub(crate) fn set_power(&mut self, power: bool, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("renderer: power {}", if power { "on" } else { "off" });
        self.power = power;
        let target = if power { self.level } else { 0 };
        self.fade.start(target, self.fade_duration, now);
    }
}

impl Filter for BrightnessFilter {
    fn apply(&mut self, frame: &mut [Rgb]) {
        let current = self.fade.current();
        if current == 255 {
            return;
        }
        if current == 0 {
            frame.fill(Rgb::default());
            return;
        }
        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, current);
            pixel.g = scale8(pixel.g, current);
            pixel.b = scale8(pixel.b, current);
        }
    }

    fn tick(&mut self, now: Instant) {
        self.fade.tick(now);
    }
}
