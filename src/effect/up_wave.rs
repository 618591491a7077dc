//! Up-wave effect
//!
//! Uses the flame front windowing, but the hue of each row follows 2D noise
//! over time and height, so colour bands travel up the frame.

use super::{
    Effect, Tick,
    flame::{Band, band, flame_height},
};
use crate::{
    FrameBuffer,
    color::{BLACK, Hsv, hsv2rgb},
    noise::NoiseSource,
    random::RandomSource,
    topology::row,
};

/// Time divisor for the hue noise (24.8 noise coordinates)
const WAVE_TIME_DIVISOR: u64 = 4;

/// Noise units between neighbouring rows
const WAVE_ROW_SPACING: u32 = 16;

/// Saturation removed at the very tip of the wave
const WAVE_TIP_WHITENING: u8 = 96;

#[derive(Debug, Clone, Copy, Default)]
pub struct UpWaveEffect;

impl Effect for UpWaveEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RandomSource, N: NoiseSource>(
        &mut self,
        tick: &mut Tick<'_, R, N>,
        leds: &mut FrameBuffer,
    ) {
        let flame = flame_height(tick.now, tick.noise);
        let t = (tick.now.as_millis() / WAVE_TIME_DIVISOR) as u32;

        for (i, led) in leds.iter_mut().enumerate() {
            let Some(h) = row(i) else {
                *led = BLACK;
                continue;
            };
            let sat = match band(h, flame) {
                Band::Solid => 255,
                Band::Tip(distance) => 255 - WAVE_TIP_WHITENING / (distance + 1),
                Band::Dark => {
                    *led = BLACK;
                    continue;
                }
            };
            let hue = tick.noise.noise2(t, u32::from(h) * WAVE_ROW_SPACING);
            *led = hsv2rgb(Hsv { hue, sat, val: 255 });
        }
    }
}
