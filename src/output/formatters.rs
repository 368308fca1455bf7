//! Formatting utilities for terminal output

use crate::core::{Clue, Mark};
use colored::{ColoredString, Colorize};
use std::collections::BTreeSet;

/// Wrap a single letter in the background color for its mark
#[must_use]
pub fn paint_letter(letter: char, mark: Mark) -> ColoredString {
    let s = letter.to_string();
    match mark {
        Mark::Exact => s.on_bright_green(),
        Mark::Present => s.on_bright_yellow(),
        Mark::Absent => s.on_white(),
    }
}

/// Format a clue as a row of colored letters
#[must_use]
pub fn render_clue(clue: &Clue) -> String {
    clue.iter()
        .map(|(letter, mark)| paint_letter(letter, mark).to_string())
        .collect()
}

/// Format the eliminated letters, sorted, on a single colored background
#[must_use]
pub fn render_wrong_letters(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .collect::<String>()
        .on_bright_cyan()
        .to_string()
}
