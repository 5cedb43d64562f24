//! Random draws behind a small trait so every system can be driven by a
//! fixed sequence in tests and by a freshly seeded generator in the page.

/// Source of uniform random numbers.
///
/// Only `next_unit` is required; the helpers cover the draws the systems make.
pub trait RandomSource {
    /// Uniform sample in [0, 1).
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in [lo, hi).
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit() * (hi - lo)
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f32) -> bool {
        self.next_unit() < p
    }

    /// -1.0 or 1.0 with equal probability.
    fn sign(&mut self) -> f32 {
        if self.chance(0.5) {
            -1.0
        } else {
            1.0
        }
    }

    /// Uniform index in [0, len). Returns `None` for an empty range.
    fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let i = (self.next_unit() * len as f32) as usize;
        Some(i.min(len - 1))
    }
}

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_unit(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly, so the result never rounds up to 1.0.
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }
}
