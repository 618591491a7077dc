//! 8-bit fixed-point helpers
//!
//! Same semantics as the `FastLED` primitives the rig's firmware was tuned
//! with, so fades and blends land on identical values.

use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Saturating add, clamps at 255
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Blend `a` towards `b` by `amount_of_b`
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Quadratic ease in/out over the full 8-bit range
pub const fn ease8(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj2 = scale8(j, j) << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Linear progress (0-255) of `elapsed` within `duration`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    let total = duration.as_millis();
    if total == 0 || elapsed.as_millis() >= total {
        return 255;
    }
    ((elapsed.as_millis() * 255) / total) as u8
}
