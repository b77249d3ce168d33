//! Deterministic random number generation for table setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical deck and layout
//! - **Context streams**: Independent sequences for deck selection and
//!   card placement, so changing one never perturbs the other
//!
//! ```
//! use memory_match::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut deck = rng.for_context("deck");
//! let mut layout = rng.for_context("layout");
//!
//! // Streams are independent but reproducible
//! let a = deck.gen_range_usize(0..100);
//! let b = GameRng::new(42).for_context("deck").gen_range_usize(0..100);
//! assert_eq!(a, b);
//! # let _ = layout.gen_range_usize(0..100);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Deterministic RNG used while dealing the table.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
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

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed is kept so a session can log it and be replayed.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain, so a logged seed replays the deal.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_seed = derive_context_seed(self.seed, context);

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Pick `amount` distinct indices from `0..len`, uniformly without
    /// replacement.
    ///
    /// Returns `None` when `amount > len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Option<Vec<usize>> {
        if amount > len {
            return None;
        }
        Some(rand::seq::index::sample(&mut self.inner, len, amount).into_vec())
    }
}

/// SHA-256 of a domain tag, the little-endian seed and the context label,
/// truncated to its first 8 bytes.
fn derive_context_seed(seed: u64, context: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(b"MEMORY_MATCH_CONTEXT_V1");
    hasher.update(seed.to_le_bytes());
    hasher.update(context.as_bytes());
    let hash = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(bytes)
}
