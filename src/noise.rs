//! Smoothed 8-bit value noise
//!
//! Coordinates are 24.8 fixed point: the high bits select a lattice cell and
//! the low byte is the position inside it. Neighbouring lattice values are
//! eased together, so stepping the low byte gives a continuous signal.

use crate::math8::{blend8, ease8};

/// Source of smooth pseudo-noise
pub trait NoiseSource {
    /// One dimensional noise, 0-255
    fn noise1(&self, x: u32) -> u8;

    /// Two dimensional noise, 0-255
    fn noise2(&self, x: u32, y: u32) -> u8;
}

/// Hashed lattice value noise
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueNoise {
    seed: u64,
}

impl ValueNoise {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// SplitMix64-style mixing of a lattice point
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    const fn lattice(&self, point: u64) -> u8 {
        let mut z = point.wrapping_add(self.seed).wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        (z ^ (z >> 31)) as u8
    }

    #[inline]
    const fn point(x: u32, y: u32) -> u64 {
        (x as u64) | ((y as u64) << 32)
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn split(coord: u32) -> (u32, u8) {
    (coord >> 8, (coord & 0xFF) as u8)
}

impl NoiseSource for ValueNoise {
    fn noise1(&self, x: u32) -> u8 {
        let (cell, frac) = split(x);
        let v0 = self.lattice(Self::point(cell, 0));
        let v1 = self.lattice(Self::point(cell.wrapping_add(1), 0));
        blend8(v0, v1, ease8(frac))
    }

    fn noise2(&self, x: u32, y: u32) -> u8 {
        let (cx, fx) = split(x);
        let (cy, fy) = split(y);
        let tx = ease8(fx);
        let ty = ease8(fy);

        // Row 0 belongs to `noise1`
        let cy = cy.wrapping_add(1);
        let nx = cx.wrapping_add(1);
        let ny = cy.wrapping_add(1);

        let top = blend8(
            self.lattice(Self::point(cx, cy)),
            self.lattice(Self::point(nx, cy)),
            tx,
        );
        let bottom = blend8(
            self.lattice(Self::point(cx, ny)),
            self.lattice(Self::point(nx, ny)),
            tx,
        );
        blend8(top, bottom, ty)
    }
}
