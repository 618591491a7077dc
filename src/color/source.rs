//! Dynamic color generators feeding color-agnostic effects

use embassy_time::Instant;

use crate::{
    color::{Rgb, hue_color},
    noise::NoiseSource,
};

const COLOUR_NAME_STATIC: &str = "static";
const COLOUR_NAME_RAINBOW: &str = "rainbow";
const COLOUR_NAME_NOISE_HUE: &str = "noise_hue";

/// Milliseconds per hue step of the rainbow generator
const RAINBOW_MS_PER_HUE: u64 = 20;

/// Time divisor for the noise hue generator (24.8 noise coordinates)
const NOISE_HUE_TIME_DIVISOR: u64 = 16;

/// Selects how the current color is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMode {
    /// Fixed user selected color
    #[default]
    Static,
    /// Hue cycling with time
    Rainbow,
    /// Hue wandering with smooth noise
    NoiseHue,
}

impl ColourMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => COLOUR_NAME_STATIC,
            Self::Rainbow => COLOUR_NAME_RAINBOW,
            Self::NoiseHue => COLOUR_NAME_NOISE_HUE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOUR_NAME_STATIC => Some(Self::Static),
            COLOUR_NAME_RAINBOW => Some(Self::Rainbow),
            COLOUR_NAME_NOISE_HUE => Some(Self::NoiseHue),
            _ => None,
        }
    }

    /// Parse a name, unknown names fall back to [`ColourMode::default`]
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse_from_str(s).unwrap_or_default()
    }
}

/// Color generator state: the active mode and the static color
#[derive(Debug, Clone, Copy)]
pub struct ColourSource {
    pub mode: ColourMode,
    pub static_colour: Rgb,
}

impl ColourSource {
    pub const fn new(mode: ColourMode, static_colour: Rgb) -> Self {
        Self {
            mode,
            static_colour,
        }
    }

    /// Color for the current tick
    #[allow(clippy::cast_possible_truncation)]
    pub fn current<N: NoiseSource>(&self, now: Instant, noise: &N) -> Rgb {
        match self.mode {
            ColourMode::Static => self.static_colour,
            ColourMode::Rainbow => hue_color((now.as_millis() / RAINBOW_MS_PER_HUE) as u8),
            ColourMode::NoiseHue => {
                let x = (now.as_millis() / NOISE_HUE_TIME_DIVISOR) as u32;
                hue_color(noise.noise1(x))
            }
        }
    }
}
