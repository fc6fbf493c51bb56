//! Uniform random source used by every generator.
//!
//! Generators take `&mut dyn UnitRandom` so callers decide between a seeded
//! `StdRng` (reproducible rebuilds), the thread RNG (fresh look each time) or
//! a `ScriptedRandom` that replays exact values in tests.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

pub trait UnitRandom {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    /// `-1.0` or `1.0` with equal probability.
    #[inline]
    fn next_sign(&mut self) -> f32 {
        if self.next_unit() < 0.5 {
            -1.0
        } else {
            1.0
        }
    }

    /// Sample in `[-0.5, 0.5)`.
    #[inline]
    fn next_centered(&mut self) -> f32 {
        self.next_unit() - 0.5
    }
}

impl<R: RngCore> UnitRandom for R {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UnitRandom for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v.clamp(0.0, 1.0 - f32::EPSILON)
    }
}

/// Seeded generator for reproducible point clouds.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fresh seed from the platform entropy source.
pub fn entropy_seed() -> u64 {
    rand::thread_rng().gen()
}
