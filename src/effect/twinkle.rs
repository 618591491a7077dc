//! Twinkle effect
//!
//! The whole frame fades a little every tick and, on average every second
//! tick, a single random LED is lit with the current color. The fading state
//! lives in the frame buffer itself.

use super::{Effect, Tick};
use crate::{
    FrameBuffer,
    color::fade_to_black,
    noise::NoiseSource,
    random::RandomSource,
    topology::LED_COUNT,
};

/// Per-tick retention, 252/256 of each channel survives
pub const TWINKLE_RETAIN: u8 = 251;

/// One in `SPARK_ODDS` ticks lights a new LED
const SPARK_ODDS: u32 = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct TwinkleEffect;

impl Effect for TwinkleEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RandomSource, N: NoiseSource>(
        &mut self,
        tick: &mut Tick<'_, R, N>,
        leds: &mut FrameBuffer,
    ) {
        fade_to_black(leds, TWINKLE_RETAIN);

        if tick.random.below(SPARK_ODDS) == 0 {
            let led = tick.random.below(LED_COUNT as u32) as usize;
            // Sparks overwrite whatever is still fading there
            if let Some(spark) = leds.get_mut(led) {
                *spark = tick.colour;
            }
        }
    }
}
