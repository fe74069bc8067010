// Copyright (c) 2026 rezky_nightky

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform integer source with inclusive bounds. Injected everywhere
/// randomness is consumed so tests can script exact sequences.
pub trait RandomSource {
    fn uniform(&mut self, min: u16, max: u16) -> u16;
}

pub struct StdRandom(StdRng);

impl StdRandom {
    pub fn from_os() -> Self {
        Self(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRandom {
    fn uniform(&mut self, min: u16, max: u16) -> u16 {
        if min >= max {
            return min;
        }
        self.0.random_range(min..=max)
    }
}
