//! Words Virtuoso
//!
//! A terminal word-guessing game: find the secret five-letter word using per-letter clues.
//!
//! # Quick Start
//!
//! ```rust
//! use words_virtuoso::core::Word;
//! use words_virtuoso::game::{GameSession, TurnOutcome};
//! use words_virtuoso::wordlists::WordList;
//!
//! let dictionary: WordList = ["crane", "trace"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let mut session = GameSession::new(Word::new("trace").unwrap());
//! assert!(matches!(session.submit("crane", &dictionary), TurnOutcome::Miss(_)));
//! assert!(matches!(session.submit("trace", &dictionary), TurnOutcome::Win { turns: 2, .. }));
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
