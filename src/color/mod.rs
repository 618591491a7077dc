mod source;
mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use source::{ColourMode, ColourSource};
pub use utils::{BLACK, add_colors, fade_to_black, hsv2rgb, hue_color, rgb_from_u32, scale_color};

pub type Rgb = RGB8;
pub type Hsv = HSV;
