//! Word lists for the game
//!
//! The full dictionary gates player guesses; the candidate pool supplies the secret.
//! Both are validated when loaded and never change afterwards.

pub mod loader;

pub use loader::{LoadError, check_candidates, check_word_list, load_word_lists, validate_word_lists};

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// An immutable set of words that keeps first-seen order
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordList {
    /// Build a list, dropping repeated words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.index.insert(*word.chars()) {
                list.words.push(word);
            }
        }
        list
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Case-insensitive lookup of a raw string
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}
