//! Seeded randomness.
//!
//! The engine asks for randomness in one shape only: a uniform index below
//! a bound, through [`RandomSource`]. [`GameRng`] is the production source;
//! tests may pass anything else that implements the trait.
//!
//! The RNG position is captured as a [`GameRngState`] and stored inside
//! `GameState`, so a saved game resumes the exact shuffle sequence.
//!
//! ```
//! use turn_seven::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let saved = rng.state();
//! let first = rng.next_below(94);
//!
//! let mut restored = GameRng::from_state(&saved);
//! assert_eq!(restored.next_below(94), first);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment used to spread derived seeds apart.
const STREAM_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Source of uniform indices.
///
/// Implementations must return a value in `0..bound` for any `bound > 0`.
pub trait RandomSource {
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// ChaCha8 stream tagged with the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    seed: u64,
    chacha: ChaCha8Rng,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            chacha: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Independent generator for sub-stream `index` (one per bot seat, say).
    #[must_use]
    pub fn stream(&self, index: u64) -> Self {
        Self::new(self.seed.wrapping_add(index.wrapping_mul(STREAM_SPREAD)))
    }

    /// `true` with probability `p`, clamped to `[0, 1]`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.chacha.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniformly pick one element.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        match items.len() {
            0 => None,
            n => items.get(self.next_below(n)),
        }
    }

    /// Snapshot the seed and stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.chacha.get_word_pos(),
        }
    }

    /// Resume from a snapshot.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self::from(state)
    }
}

impl From<&GameRngState> for GameRng {
    fn from(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.chacha.set_word_pos(state.word_pos);
        rng
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, bound: usize) -> usize {
        self.chacha.gen_range(0..bound)
    }
}

/// Serializable RNG position.
///
/// `word_pos` is ChaCha's 128-bit block counter, so capturing and restoring
/// costs the same no matter how far the stream has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

impl GameRngState {
    /// Position of a generator that has not drawn anything yet.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        GameRng::new(seed).state()
    }
}
