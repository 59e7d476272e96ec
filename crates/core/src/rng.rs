//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the seven kinds with equal probability, independent
//! of earlier draws. Backed by a seeded PCG so a seed reproduces a game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::PieceKind;

/// Seeded uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    seed: u64,
    rng: Pcg32,
}

impl PieceGenerator {
    /// Create a generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create a generator with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceGenerator::new(12345);
        let mut b = PieceGenerator::new(12345);
        for _ in 0..100 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_every_kind_appears() {
        let mut generator = PieceGenerator::new(7);
        let mut seen = [0u32; 7];
        for _ in 0..700 {
            seen[generator.draw().index()] += 1;
        }
        for (i, count) in seen.iter().enumerate() {
            assert!(*count > 0, "kind {i} never drawn");
        }
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(PieceGenerator::new(42).seed(), 42);
    }
}
