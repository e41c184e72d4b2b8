//! Deterministic random number generation for code generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical targets
//! - **Injectable**: Code generation only needs an [`IndexSource`], so tests
//!   can substitute a scripted source
//! - **Serializable**: O(1) state capture and restore for round snapshots
//!
//! ```
//! use mastermind_core::core::{GameRng, IndexSource};
//!
//! let mut rng = GameRng::new(42);
//! let first = rng.next_index(7);
//! assert!(first < 7);
//!
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.next_index(7), first);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A uniform source of palette indices.
///
/// This is the only randomness code generation consumes.
pub trait IndexSource {
    /// Return an index drawn uniformly from `0..upper`.
    ///
    /// Callers never pass `upper == 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Deterministic RNG backing every round.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    ///
    /// The drawn seed is kept, so the RNG stays restorable via [`GameRng::state`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl IndexSource for GameRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range_usize(0..upper)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_index(7), rng2.next_index(7));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..16).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..16).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_next_index_in_bounds() {
        let mut rng = GameRng::new(7);
        for upper in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_index(upper) < upper);
            }
        }
        // A single-entry range can only yield zero
        assert_eq!(rng.next_index(1), 0);
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        assert_eq!(rng.state().seed, rng.seed());
        assert_eq!(rng.state().word_pos, 0);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.next_index(7);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_index(7)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_index(7)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
