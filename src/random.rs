//! Uniform integer randomness for sparks and branch choices

/// Source of uniform random integers
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`; returns 0 when `bound` is 0
    fn below(&mut self, bound: u32) -> u32;
}

/// Seedable xorshift64 generator
#[derive(Debug, Clone)]
pub struct XorShift {
    state: u64,
}

impl XorShift {
    /// Create a generator, a zero seed is replaced with 1
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    const fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for XorShift {
    #[allow(clippy::cast_possible_truncation)]
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % u64::from(bound)) as u32
    }
}
