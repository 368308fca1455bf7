//! Per-letter clue calculation
//!
//! Each position of a guess is classified on its own:
//! - Exact   = same letter at the same position in the secret
//! - Present = letter occurs somewhere else in the secret
//! - Absent  = letter does not occur in the secret
//!
//! Occurrences are not rationed: a guessed letter that appears once in the secret is
//! marked Present at every non-exact position it holds.

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

/// Feedback for one guess: the guessed letters (uppercase) with their marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    letters: [char; WORD_LENGTH],
    marks: [Mark; WORD_LENGTH],
}

impl Clue {
    /// Evaluate `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use words_virtuoso::core::{Clue, Mark, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let clue = Clue::evaluate(&secret, &guess);
    ///
    /// assert_eq!(
    ///     clue.marks(),
    ///     &[Mark::Absent, Mark::Exact, Mark::Present, Mark::Present, Mark::Exact]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut letters = [' '; WORD_LENGTH];
        let mut marks = [Mark::Absent; WORD_LENGTH];

        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            letters[i] = char::from(g.to_ascii_uppercase());
            marks[i] = if g == s {
                Mark::Exact
            } else if secret.has_letter(g) {
                Mark::Present
            } else {
                Mark::Absent
            };
        }

        Self { letters, marks }
    }

    /// Guessed letters in uppercase
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.marks
    }

    /// Letters paired with their marks, in guess order
    pub fn iter(&self) -> impl Iterator<Item = (char, Mark)> + '_ {
        self.letters.iter().copied().zip(self.marks.iter().copied())
    }

    /// Check if every letter is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Exact)
    }

    /// Uppercase letters marked Absent
    pub fn absent_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.iter()
            .filter(|&(_, mark)| mark == Mark::Absent)
            .map(|(letter, _)| letter)
    }

    #[cfg(test)]
    fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }
}
