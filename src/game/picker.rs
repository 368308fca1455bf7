//! Secret word selection
//!
//! Defines the `SecretPicker` trait and concrete implementations.

use crate::core::Word;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A source for choosing the secret word from the candidate pool
pub trait SecretPicker {
    /// Choose one candidate
    ///
    /// Returns `None` if no candidate can be chosen.
    fn pick<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word>;
}

/// Uniform random selection
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Create a picker seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible picker
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretPicker for RandomPicker {
    fn pick<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        candidates.choose(&mut self.rng)
    }
}

/// Always picks the named word, if it is a candidate
pub struct FixedPicker {
    word: String,
}

impl FixedPicker {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().to_ascii_lowercase(),
        }
    }
}

impl SecretPicker for FixedPicker {
    fn pick<'a>(&mut self, candidates: &'a [Word]) -> Option<&'a Word> {
        candidates.iter().find(|w| w.text() == self.word)
    }
}
