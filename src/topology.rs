//! Wiring-order to structure mapping
//!
//! The strip runs serially over the 24 edges of the frame, 7 LEDs per edge.
//! These lookups translate a linear LED index into the edge it sits on and
//! its approximate vertical row.

/// Number of edges in the frame
pub const EDGE_COUNT: usize = 24;

/// Number of LEDs on a single edge
pub const LEDS_PER_EDGE: usize = 7;

/// Total number of LEDs on the strip
pub const LED_COUNT: usize = EDGE_COUNT * LEDS_PER_EDGE;

/// Number of distinct rows returned by [`height`]
pub const ROW_COUNT: u8 = 28;

/// Returned by [`height`] for indices outside the table
pub const UNDEFINED_HEIGHT: u8 = 255;

/// Returned by [`angle`] for edges without an exact azimuth
pub const UNDEFINED_ANGLE: u16 = 360;

/// Edge the LED belongs to
#[inline]
pub const fn edge(led: usize) -> usize {
    led / LEDS_PER_EDGE
}

/// Position of the LED inside its edge, `0..LEDS_PER_EDGE`
#[inline]
pub const fn offset(led: usize) -> usize {
    led % LEDS_PER_EDGE
}

/// First LED index of an edge
#[inline]
pub const fn first_led(edge: usize) -> usize {
    edge * LEDS_PER_EDGE
}

/// Last LED index of an edge
#[inline]
pub const fn last_led(edge: usize) -> usize {
    edge * LEDS_PER_EDGE + LEDS_PER_EDGE - 1
}

/// Row height of the LED, or [`UNDEFINED_HEIGHT`]
///
/// Edges are grouped in four bands of seven rows. Within a band the LED
/// index either climbs with the row or descends, depending on which way the
/// strip was wound over that edge.
#[allow(clippy::cast_possible_truncation)]
pub const fn height(led: usize) -> u8 {
    let step = offset(led) as u8;
    match edge(led) {
        0 | 4 => step,
        3 => 6 - step,
        1 | 5 | 11 | 13 | 21 => 7 + step,
        2 | 10 | 12 | 20 => 13 - step,
        6 | 14 | 16 | 18 | 22 => 14 + step,
        9 | 15 | 17 | 19 => 20 - step,
        7 | 23 => 21 + step,
        8 => 27 - step,
        _ => UNDEFINED_HEIGHT,
    }
}

/// Row height as an option, `None` where [`height`] has no entry
#[inline]
pub const fn row(led: usize) -> Option<u8> {
    match height(led) {
        UNDEFINED_HEIGHT => None,
        h => Some(h),
    }
}

/// Azimuth of the edge carrying the LED in degrees, or [`UNDEFINED_ANGLE`]
///
/// Only the edges lying in a vertical plane through the rig's axis have a
/// single azimuth.
pub const fn angle(led: usize) -> u16 {
    match edge(led) {
        0 | 12 => 0,
        8 | 14 => 60,
        4 | 10 => 120,
        7 | 19 => 180,
        3 | 21 => 240,
        17 | 23 => 300,
        _ => UNDEFINED_ANGLE,
    }
}
