//! RNG module - seeded color generation
//!
//! The engine only ever asks its generator for "the next non-empty color".
//! That contract is the [`ColorSource`] trait; [`SimpleRng`] is the default,
//! deterministic implementation so replays and tests are reproducible.

use crate::types::Color;

/// Supplier of fresh colors for the spawn row
pub trait ColorSource {
    /// Produce a uniformly chosen non-empty color
    fn next_color(&mut self) -> Color;
}

impl<T: ColorSource + ?Sized> ColorSource for &mut T {
    fn next_color(&mut self) -> Color {
        (**self).next_color()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ColorSource for SimpleRng {
    fn next_color(&mut self) -> Color {
        Color::ALL[self.next_range(Color::COUNT as u32) as usize]
    }
}
