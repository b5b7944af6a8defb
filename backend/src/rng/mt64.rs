//! 64-bit Mersenne Twister with a five-term recurrence
//!
//! State is 312 words advanced in place by a recurrence that combines each
//! word with its successor and three taps at offsets 63, 151 and 224. The
//! period is 2^19937-1. Output words go through a tempering permutation
//! before being returned or converted to `f64`.
//!
//! # Determinism
//!
//! Same seed → same sequence, bit for bit, on every platform. All seeding
//! and recurrence arithmetic is explicit wrapping `u64` math.
//!
//! # Sharing
//!
//! The generator has no internal synchronization. Every draw mutates the
//! state, so callers that share one instance across threads must serialize
//! access themselves (a `Mutex<Mt64>`, or one generator per thread).

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use super::checkpoint::StateSnapshot;
use super::convert::{temper, to_real_closed, to_real_half_open, to_real_open};
use super::params::{
    DEFAULT_SEED, LMASK, M0, M1, M2, MATRIX_A, NN, SEED_INCREMENT, SEED_MULTIPLIER,
    SEED_POSITION_STEP, UMASK, UNSEEDED,
};

const MAG01: [u64; 2] = [0, MATRIX_A];

/// Deterministic 64-bit Mersenne Twister
///
/// A fresh generator is unseeded. The first draw (or `advance`) seeds it
/// with [`DEFAULT_SEED`](crate::rng::DEFAULT_SEED) and twists that state
/// once, so the lazy stream is `with_seed(DEFAULT_SEED)` followed by
/// `advance()`.
///
/// # Example
/// ```
/// use mt64_core_rs::Mt64;
///
/// let mut rng = Mt64::with_seed(12345);
/// let value = rng.next_uint64();
/// let probability = rng.next_real_half_open();
/// assert!(probability >= 0.0 && probability < 1.0);
/// # let _ = value;
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "StateSnapshot", try_from = "StateSnapshot")]
pub struct Mt64 {
    /// State vector
    words: [u64; NN],
    /// Words consumed from the current generation, or `UNSEEDED`
    cursor: usize,
}

impl Mt64 {
    /// Create an unseeded generator
    ///
    /// # Example
    /// ```
    /// use mt64_core_rs::Mt64;
    ///
    /// let mut lazy = Mt64::new();
    /// let mut explicit = Mt64::with_seed(987654321);
    /// explicit.advance();
    /// assert_eq!(lazy.next_uint64(), explicit.next_uint64());
    /// ```
    pub fn new() -> Self {
        Self {
            words: [0; NN],
            cursor: UNSEEDED,
        }
    }

    /// Create a generator seeded with `seed`
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = Self::new();
        rng.seed(seed);
        rng
    }

    /// Rebuild a generator from raw parts; callers validate first.
    pub(crate) fn from_parts(words: [u64; NN], cursor: usize) -> Self {
        Self { words, cursor }
    }

    /// Fill the whole state from `value` and reset the cursor
    ///
    /// Each word takes the upper half of one LCG step and the upper half of
    /// the next step shifted down, plus a position-dependent offset.
    pub fn seed(&mut self, value: u64) {
        let mut scratch = value;
        for (position, word) in self.words.iter_mut().enumerate() {
            scratch = scratch
                .wrapping_mul(SEED_MULTIPLIER)
                .wrapping_add(SEED_INCREMENT);
            let high = scratch & 0xFFFF_FFFF_0000_0000;
            scratch = scratch
                .wrapping_mul(SEED_MULTIPLIER)
                .wrapping_add(SEED_INCREMENT);
            let low = scratch >> 32;
            *word = (high | low)
                .wrapping_add(SEED_POSITION_STEP.wrapping_mul(position as u64 + 1));
        }
        self.cursor = 0;
        debug!(seed = value, "seeded generator");
    }

    /// Regenerate all 312 words and reset the cursor
    ///
    /// Seeds with the default seed first if the generator was never seeded,
    /// then twists that state once.
    pub fn advance(&mut self) {
        if self.cursor == UNSEEDED {
            debug!(seed = DEFAULT_SEED, "no explicit seed, using default");
            self.seed(DEFAULT_SEED);
        }

        let mt = &mut self.words;

        // Split at the points where each tap wraps to the front of the
        // array so the hot loops index without a modulo.
        for i in 0..NN - M2 {
            mt[i] = twist_pair(mt[i], mt[i + 1]) ^ mt[i + M0] ^ mt[i + M1] ^ mt[i + M2];
        }
        for i in NN - M2..NN - M1 {
            mt[i] = twist_pair(mt[i], mt[i + 1]) ^ mt[i + M0] ^ mt[i + M1] ^ mt[i + M2 - NN];
        }
        for i in NN - M1..NN - M0 {
            mt[i] =
                twist_pair(mt[i], mt[i + 1]) ^ mt[i + M0] ^ mt[i + M1 - NN] ^ mt[i + M2 - NN];
        }
        for i in NN - M0..NN - 1 {
            mt[i] = twist_pair(mt[i], mt[i + 1])
                ^ mt[i + M0 - NN]
                ^ mt[i + M1 - NN]
                ^ mt[i + M2 - NN];
        }
        mt[NN - 1] = twist_pair(mt[NN - 1], mt[0]) ^ mt[M0 - 1] ^ mt[M1 - 1] ^ mt[M2 - 1];

        self.cursor = 0;
        trace!("state vector advanced");
    }

    /// Next tempered word; twists first when the generation is used up.
    ///
    /// The unseeded marker is above `NN`, so an unseeded generator goes
    /// through `advance`, which seeds with the default seed and twists.
    #[inline]
    fn next_word(&mut self) -> u64 {
        if self.cursor >= NN {
            self.advance();
        }
        let x = self.words[self.cursor];
        self.cursor += 1;
        temper(x)
    }

    /// Uniform value on [0, 2^64-1]
    pub fn next_uint64(&mut self) -> u64 {
        self.next_word()
    }

    /// Uniform value on [0.0, 1.0]
    pub fn next_real_closed(&mut self) -> f64 {
        to_real_closed(self.next_word())
    }

    /// Uniform value on [0.0, 1.0)
    pub fn next_real_half_open(&mut self) -> f64 {
        to_real_half_open(self.next_word())
    }

    /// Uniform value on (0.0, 1.0) with 52 bits of resolution
    pub fn next_real_open(&mut self) -> f64 {
        to_real_open(self.next_word())
    }

    /// True once the state has been filled, explicitly or lazily
    pub fn is_seeded(&self) -> bool {
        self.cursor != UNSEEDED
    }

    /// Words consumed from the current generation (`NN + 1` when unseeded)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Raw (untempered) state vector
    pub fn words(&self) -> &[u64; NN] {
        &self.words
    }
}

impl Default for Mt64 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Mt64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt64")
            .field("seeded", &self.is_seeded())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

/// Upper bits of `upper` joined with the low 31 bits of `lower`, shifted
/// right once, with the matrix constant folded in when bit 0 was set.
#[inline(always)]
fn twist_pair(upper: u64, lower: u64) -> u64 {
    let x = (upper & UMASK) | (lower & LMASK);
    (x >> 1) ^ MAG01[(x & 1) as usize]
}
