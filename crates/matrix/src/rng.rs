//! Small xorshift PRNG for the animation effects.
//!
//! Statistical quality only has to be "looks random on an 8-pixel bar";
//! determinism under a fixed seed is what the tests rely on.

/// xorshift32 generator.
pub struct Rng(u32);

impl Rng {
    /// Seeded generator. A zero seed is nudged to a fixed non-zero value —
    /// xorshift has an all-zero fixed point.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self(if seed == 0 { 0x9E37_79B9 } else { seed })
    }

    /// Next raw 32-bit value.
    pub fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    /// Uniform-ish value in `0..max`. `max` must be non-zero.
    #[allow(clippy::arithmetic_side_effects)] // Safety: divisor forced >= 1
    pub fn range(&mut self, max: u32) -> u32 {
        self.next() % max.max(1)
    }
}
