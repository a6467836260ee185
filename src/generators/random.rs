// src/generators/random.rs
use std::fmt;
use std::str::FromStr;

use rand::rngs::{OsRng, ThreadRng};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use serde::{Deserialize, Serialize};

/// Source of uniform indices for the generator.
///
/// `next_index(bound)` must return a value in `0..bound` with every value
/// equally likely. Callers never pass `bound == 0`.
pub trait RandomSource {
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Thread-local RNG. Fast, not meant for secrets that need an audit trail.
pub struct FastRandom(ThreadRng);

impl FastRandom {
    pub fn new() -> Self {
        FastRandom(rand::thread_rng())
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Draws every index straight from the operating system.
#[derive(Default)]
pub struct SecureRandom;

impl RandomSource for SecureRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        OsRng.gen_range(0..bound)
    }
}

/// Reproducible stream for tests and `--seed` runs.
pub struct SeededRandom(ChaCha20Rng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomKind {
    #[default]
    Fast,
    Secure,
}

impl RandomKind {
    pub fn build(self) -> Box<dyn RandomSource> {
        match self {
            RandomKind::Fast => Box::new(FastRandom::new()),
            RandomKind::Secure => Box::new(SecureRandom),
        }
    }
}

impl fmt::Display for RandomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomKind::Fast => write!(f, "fast"),
            RandomKind::Secure => write!(f, "secure"),
        }
    }
}

impl FromStr for RandomKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Ok(RandomKind::Fast),
            "secure" | "os" => Ok(RandomKind::Secure),
            other => Err(format!("Unknown random source '{}'", other)),
        }
    }
}
