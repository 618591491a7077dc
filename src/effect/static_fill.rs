//! Static color fill effect

use super::{Effect, Tick};
use crate::{FrameBuffer, noise::NoiseSource, random::RandomSource};

/// Fills every LED with the current color mode output
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFillEffect;

impl Effect for StaticFillEffect {
    fn render<R: RandomSource, N: NoiseSource>(
        &mut self,
        tick: &mut Tick<'_, R, N>,
        leds: &mut FrameBuffer,
    ) {
        leds.fill(tick.colour);
    }
}
