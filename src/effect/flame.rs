//! Flame effect
//!
//! A flame front rises and falls with smooth noise. Rows well below the front
//! burn solid red-orange, the three rows below the tip fade towards yellow,
//! and everything above the tip is dark.

use embassy_time::Instant;

use super::{Effect, Tick};
use crate::{
    FrameBuffer,
    color::{BLACK, Rgb},
    math8::scale8,
    noise::NoiseSource,
    random::RandomSource,
    topology::{ROW_COUNT, row},
};

/// Time divisor for the flame front noise (24.8 noise coordinates)
const FLAME_TIME_DIVISOR: u64 = 8;

/// Number of rows forming the tapered tip
const TIP_ROWS: u8 = 3;

const FLAME_BODY: Rgb = Rgb { r: 255, g: 24, b: 0 };
const FLAME_TIP_GREEN: u8 = 96;

/// Where a row sits relative to the flame front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Band {
    Solid,
    /// Within the tip, carrying the distance below the front (0-2)
    Tip(u8),
    Dark,
}

/// Current flame front, a row in `[0, ROW_COUNT)`
#[allow(clippy::cast_possible_truncation)]
pub fn flame_height<N: NoiseSource>(now: Instant, noise: &N) -> u8 {
    let sample = noise.noise1((now.as_millis() / FLAME_TIME_DIVISOR) as u32);
    scale8(sample, ROW_COUNT - 1)
}

/// Classify a row against the flame front
///
/// The solid limit is computed in wrapping 8-bit arithmetic, so a front
/// below [`TIP_ROWS`] lights every row solid.
pub(crate) const fn band(row: u8, flame: u8) -> Band {
    if row <= flame.wrapping_sub(TIP_ROWS) {
        Band::Solid
    } else if row <= flame {
        Band::Tip(flame - row)
    } else {
        Band::Dark
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlameEffect;

impl Effect for FlameEffect {
    fn render<R: RandomSource, N: NoiseSource>(
        &mut self,
        tick: &mut Tick<'_, R, N>,
        leds: &mut FrameBuffer,
    ) {
        let flame = flame_height(tick.now, tick.noise);

        for (i, led) in leds.iter_mut().enumerate() {
            let Some(h) = row(i) else {
                *led = BLACK;
                continue;
            };
            *led = match band(h, flame) {
                Band::Solid => FLAME_BODY,
                Band::Tip(distance) => Rgb {
                    r: 255,
                    g: FLAME_TIP_GREEN / (distance + 1),
                    b: 0,
                },
                Band::Dark => BLACK,
            };
        }
    }
}
