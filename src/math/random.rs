//! Injectable sources of uniform samples
//!
//! Every random decision the generator makes is a single draw from
//! [`RandomSource::sample_unit`], so swapping the source is enough to make a
//! run fully reproducible.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Supplies uniform samples in `[0, 1)`
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`
    fn sample_unit(&mut self) -> f64;
}

/// Seeded pseudo-random source for reproducible generation
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a deterministic source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn sample_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of samples, wrapping around at the end
///
/// Values are clamped into `[0, 1)`. An empty script always yields `0.0`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Largest value a script may yield
    const UPPER: f64 = 1.0 - f64::EPSILON;

    /// Create a source that replays `samples` in order
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Number of samples consumed so far
    pub const fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn sample_unit(&mut self) -> f64 {
        let value = if self.samples.is_empty() {
            0.0
        } else {
            self.samples
                .get(self.cursor % self.samples.len())
                .copied()
                .unwrap_or(0.0)
        };
        self.cursor += 1;
        value.clamp(0.0, Self::UPPER)
    }
}
