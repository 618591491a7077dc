//! Per-tick animation effects
//!
//! Every effect instance lives for the whole process inside [`Effects`], so
//! switching modes never throws away trail or particle state. Exactly one
//! effect renders into the frame buffer per tick.

mod chaser;
mod flame;
mod static_fill;
mod twinkle;
mod up_wave;

use embassy_time::Instant;

pub use chaser::{ChaserConfig, ChaserEffect, MAX_PARTICLES, Particle, ParticleSeed};
pub use flame::{FlameEffect, flame_height};
pub use static_fill::StaticFillEffect;
pub use twinkle::TwinkleEffect;
pub use up_wave::UpWaveEffect;

use crate::{FrameBuffer, color::Rgb, noise::NoiseSource, random::RandomSource};

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_FLAME: &str = "flame";
const MODE_NAME_TWINKLE: &str = "twinkle";
const MODE_NAME_UP_WAVE: &str = "up_wave";
const MODE_NAME_CHASER: &str = "chaser";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_STATIC: u8 = 1;
const MODE_ID_FLAME: u8 = 2;
const MODE_ID_TWINKLE: u8 = 3;
const MODE_ID_UP_WAVE: u8 = 4;
const MODE_ID_CHASER: u8 = 5;

/// Inputs shared by all effects for one tick
pub struct Tick<'a, R, N> {
    /// Current time
    pub now: Instant,
    /// Output of the active color mode
    pub colour: Rgb,
    /// Uniform randomness
    pub random: &'a mut R,
    /// Smooth noise
    pub noise: &'a N,
}

pub trait Effect {
    /// Render a single tick into the frame buffer
    fn render<R: RandomSource, N: NoiseSource>(
        &mut self,
        tick: &mut Tick<'_, R, N>,
        leds: &mut FrameBuffer,
    );
}

/// Selects the active effect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LightMode {
    Off = MODE_ID_OFF,
    #[default]
    Static = MODE_ID_STATIC,
    Flame = MODE_ID_FLAME,
    Twinkle = MODE_ID_TWINKLE,
    UpWave = MODE_ID_UP_WAVE,
    Chaser = MODE_ID_CHASER,
}

impl LightMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_STATIC => Self::Static,
            MODE_ID_FLAME => Self::Flame,
            MODE_ID_TWINKLE => Self::Twinkle,
            MODE_ID_UP_WAVE => Self::UpWave,
            MODE_ID_CHASER => Self::Chaser,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Static => MODE_NAME_STATIC,
            Self::Flame => MODE_NAME_FLAME,
            Self::Twinkle => MODE_NAME_TWINKLE,
            Self::UpWave => MODE_NAME_UP_WAVE,
            Self::Chaser => MODE_NAME_CHASER,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_STATIC => Some(Self::Static),
            MODE_NAME_FLAME => Some(Self::Flame),
            MODE_NAME_TWINKLE => Some(Self::Twinkle),
            MODE_NAME_UP_WAVE => Some(Self::UpWave),
            MODE_NAME_CHASER => Some(Self::Chaser),
            _ => None,
        }
    }

    /// Parse a name, unknown names fall back to [`LightMode::default`]
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse_from_str(s).unwrap_or_default()
    }
}

/// All effect instances, one per light mode
#[derive(Debug, Clone)]
pub struct Effects {
    pub static_fill: StaticFillEffect,
    pub twinkle: TwinkleEffect,
    pub flame: FlameEffect,
    pub up_wave: UpWaveEffect,
    pub chaser: ChaserEffect,
}

impl Effects {
    pub fn new(chaser: &ChaserConfig) -> Self {
        Self {
            static_fill: StaticFillEffect,
            twinkle: TwinkleEffect,
            flame: FlameEffect,
            up_wave: UpWaveEffect,
            chaser: ChaserEffect::new(chaser),
        }
    }

    /// Render the effect selected by `mode`
    ///
    /// [`LightMode::Off`] clears the buffer instead of computing anything.
    pub fn render<R: RandomSource, N: NoiseSource>(
        &mut self,
        mode: LightMode,
        tick: &mut Tick<'_, R, N>,
        leds: &mut FrameBuffer,
    ) {
        match mode {
            LightMode::Off => leds.fill(Rgb::default()),
            LightMode::Static => self.static_fill.render(tick, leds),
            LightMode::Flame => self.flame.render(tick, leds),
            LightMode::Twinkle => self.twinkle.render(tick, leds),
            LightMode::UpWave => self.up_wave.render(tick, leds),
            LightMode::Chaser => self.chaser.render(tick, leds),
        }
    }
}
