//! Injected random source
//!
//! One seeded PCG stream feeds every random draw in the simulation (spawn
//! angles, speeds, tumble rates, split deflection), so a fixed seed replays
//! a run exactly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random source for the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct GameRng(Pcg32);

impl GameRng {
    /// Create a source from a seed; equal seeds produce equal streams
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    /// Uniform draw in [a, b)
    pub fn uniform(&mut self, a: f32, b: f32) -> f32 {
        self.0.random_range(a..b)
    }
}
