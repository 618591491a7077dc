use embassy_time::{Duration, Instant};

use crate::color::Rgb;

mod brightness;
mod color_correction;

pub(crate) trait Filter {
    /// Apply the filter to an output frame
    fn apply(&mut self, frame: &mut [Rgb]);

    fn tick(&mut self, _now: Instant) {}
}

pub(crate) use brightness::BrightnessFilter;
pub(crate) use color_correction::ColorCorrection;

#[derive(Debug, Clone)]
pub struct FilterProcessorConfig {
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Per-channel correction factors
    pub color_correction: Rgb,
    /// Duration of brightness and power fades
    pub fade: Duration,
}

/// Output filters applied to a copy of the frame before flushing
///
/// They never touch the frame buffer the effects keep state in.
#[derive(Debug)]
pub(crate) struct FilterProcessor {
    pub(crate) brightness: BrightnessFilter,
    pub(crate) color_correction: ColorCorrection,
}

impl FilterProcessor {
    pub(crate) fn new(config: &FilterProcessorConfig, power: bool) -> Self {
        Self {
            brightness: BrightnessFilter::new(config.brightness, power, config.fade),
            color_correction: ColorCorrection::new(config.color_correction),
        }
    }

    pub(crate) fn tick(&mut self, now: Instant) {
        self.brightness.tick(now);
        self.color_correction.tick(now);
    }

    /// Apply all filters in order: correction first, then brightness
    pub(crate) fn apply(&mut self, frame: &mut [Rgb]) {
        self.color_correction.apply(frame);
        self.brightness.apply(frame);
    }
}
