//! Command implementations

pub mod play;

pub use play::{TITLE, run_play};
