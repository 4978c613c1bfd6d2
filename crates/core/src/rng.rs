//! RNG module - piece selection
//!
//! Every spawn picks one of the seven shapes uniformly and independently.
//! There is no bag: long droughts and repeats are possible, which is a known
//! fairness limitation of this ruleset rather than a bug.
//!
//! A small seeded LCG keeps games reproducible, and a fixed sequence source
//! exists for scripted games (tests, demos, benchmarks).

use crate::types::ShapeKind;

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
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Where the engine gets its next shape from
#[derive(Debug, Clone)]
pub enum PieceSource {
    /// Uniform, independent choice per spawn
    Uniform(SimpleRng),
    /// Fixed list replayed in a cycle
    Sequence { kinds: Vec<ShapeKind>, index: usize },
}

impl PieceSource {
    pub fn uniform(seed: u32) -> Self {
        PieceSource::Uniform(SimpleRng::new(seed))
    }

    /// Cycle through `kinds`. An empty list falls back to `[I]`.
    pub fn sequence(kinds: impl Into<Vec<ShapeKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(ShapeKind::I);
        }
        PieceSource::Sequence { kinds, index: 0 }
    }

    /// Draw the next shape
    pub fn draw(&mut self) -> ShapeKind {
        match self {
            PieceSource::Uniform(rng) => {
                let i = rng.next_range(ShapeKind::ALL.len() as u32) as usize;
                ShapeKind::ALL[i]
            }
            PieceSource::Sequence { kinds, index } => {
                let kind = kinds[*index % kinds.len()];
                *index = (*index + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::uniform(1)
    }
}
