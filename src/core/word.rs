//! Word validation and representation
//!
//! A Word is exactly 5 ASCII letters with no letter repeated. The same rules gate
//! both the loaded word lists and every guess the player types.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter word, normalized to lowercase
///
/// Identity is case-insensitive: `Word::new("CRANE")` equals `Word::new("crane")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Reason a string is not an admissible word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word contains {0} invalid characters")]
    InvalidCharacters(usize),
    #[error("word has duplicate letters")]
    DuplicateLetters,
}

/// Count the characters that are not ASCII letters
///
/// # Examples
/// ```
/// use words_virtuoso::core::count_invalid_characters;
///
/// assert_eq!(count_invalid_characters("wor1d"), 1);
/// assert_eq!(count_invalid_characters("crane"), 0);
/// ```
#[must_use]
pub fn count_invalid_characters(s: &str) -> usize {
    s.chars().filter(|c| !c.is_ascii_alphabetic()).count()
}

/// Check whether any letter occurs more than once, ignoring case and position
///
/// # Examples
/// ```
/// use words_virtuoso::core::has_duplicate_letters;
///
/// assert!(has_duplicate_letters("hello"));
/// assert!(has_duplicate_letters("Abbey"));
/// assert!(!has_duplicate_letters("world"));
/// ```
#[must_use]
pub fn has_duplicate_letters(s: &str) -> bool {
    let mut seen = 0u32;
    for byte in s.bytes().filter(u8::is_ascii_alphabetic) {
        let bit = 1u32 << (byte.to_ascii_lowercase() - b'a');
        if seen & bit != 0 {
            return true;
        }
        seen |= bit;
    }
    false
}

/// Check whether a string is an admissible 5-letter word
#[must_use]
pub fn is_word_valid(s: &str) -> bool {
    Word::new(s).is_ok()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Checks run in a fixed order so the first failing rule is the one reported:
    /// length, then invalid characters, then duplicate letters.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains characters other than ASCII letters
    /// - Contains the same letter twice (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("hello").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        let invalid = count_invalid_characters(text);
        if invalid > 0 {
            return Err(WordError::InvalidCharacters(invalid));
        }

        if has_duplicate_letters(text) {
            return Err(WordError::DuplicateLetters);
        }

        let text = text.to_ascii_lowercase();
        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase bytes
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Check if the word contains a specific lowercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
