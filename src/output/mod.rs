//! Terminal output formatting
//!
//! Colored rendering of clues and eliminated letters.

pub mod formatters;

pub use formatters::{render_clue, render_wrong_letters};
