//! Turn-based game logic
//!
//! A `GameSession` tracks one game; a `SecretPicker` chooses its secret word.

mod picker;
mod session;

pub use picker::{FixedPicker, RandomPicker, SecretPicker};
pub use session::{
    EXIT_COMMAND, EndReason, GameSession, GameState, GuessError, TurnOutcome,
};
