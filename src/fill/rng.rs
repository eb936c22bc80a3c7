//! Seeded linear congruential generator
//!
//! Same seed, same sequence, on every platform. One generator per render;
//! never shared between renders or threads.

const MULTIPLIER: u64 = 9_301;
const INCREMENT: u64 = 49_297;
const MODULUS: u64 = 233_280;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed) % MODULUS,
        }
    }

    /// Next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Next index in `0..len` (0 when `len` is 0)
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}
