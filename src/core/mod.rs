//! Core domain types for the game
//!
//! Word validation and clue calculation. Everything here is pure and has no I/O.

mod clue;
mod word;

pub use clue::{Clue, Mark};
pub use word::{
    WORD_LENGTH, Word, WordError, count_invalid_characters, has_duplicate_letters, is_word_valid,
};
