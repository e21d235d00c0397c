//! RNG module - tile spawning randomness
//!
//! The engine never touches a global RNG. It draws from a [`TileSource`],
//! which only needs to answer two questions: "which of these `n` cells?" and
//! "did an event of probability `p` happen?".
//!
//! - [`RandSource`] adapts any `rand` generator (seeded `StdRng` for
//!   reproducible games, entropy-seeded for normal play).
//! - [`ScriptedSource`] replays fixed answers for deterministic tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{SPAWN_FOUR_PROBABILITY, SPAWN_HIGH_TILE, SPAWN_LOW_TILE};

/// Source of randomness for tile spawning
pub trait TileSource {
    /// Uniform index in `0..n`. Callers guarantee `n > 0`.
    fn pick(&mut self, n: usize) -> usize;

    /// `true` with probability `p`
    fn chance(&mut self, p: f64) -> bool;
}

impl<S: TileSource + ?Sized> TileSource for &mut S {
    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }

    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }
}

/// Value of a freshly spawned tile: 4 with probability 0.1, otherwise 2
pub fn spawn_value<S: TileSource + ?Sized>(source: &mut S) -> u32 {
    if source.chance(SPAWN_FOUR_PROBABILITY) {
        SPAWN_HIGH_TILE
    } else {
        SPAWN_LOW_TILE
    }
}

/// [`TileSource`] backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RandSource<R = StdRng> {
    rng: R,
}

impl RandSource<StdRng> {
    /// Reproducible source: the same seed yields the same game
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileSource for RandSource<R> {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }
}

/// Replays queued answers; once a queue runs dry it answers `0` / `false`.
///
/// Picks are reduced modulo `n`, so any queued index is in range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedSource {
    pub fn new(
        picks: impl IntoIterator<Item = usize>,
        chances: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            chances: chances.into_iter().collect(),
        }
    }

    /// Always picks the first candidate and never rolls a 4
    pub fn first_cell() -> Self {
        Self::default()
    }

    pub fn push_pick(&mut self, index: usize) {
        self.picks.push_back(index);
    }

    pub fn push_chance(&mut self, hit: bool) {
        self.chances.push_back(hit);
    }
}

impl TileSource for ScriptedSource {
    fn pick(&mut self, n: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % n.max(1)
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
