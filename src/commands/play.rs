//! Interactive game mode
//!
//! Line-based play over any reader and writer: stdin/stdout in the binary, in-memory
//! buffers in tests.

use crate::game::{EndReason, GameSession, TurnOutcome};
use crate::output::{render_clue, render_wrong_letters};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Title printed once before the first prompt
pub const TITLE: &str = "Words Virtuoso";

/// Run the interactive game until the player wins or quits
///
/// End of input is treated like the exit command.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut GameSession,
    dictionary: &WordList,
    mut input: R,
    mut output: W,
) -> Result<EndReason> {
    writeln!(output, "{TITLE}")?;

    loop {
        writeln!(output, "Input a 5-letter word:")?;
        output.flush()?;

        let Some(line) = read_guess(&mut input)? else {
            writeln!(output, "The game is over.")?;
            return Ok(EndReason::Quit);
        };

        match session.submit(&line, dictionary) {
            TurnOutcome::Quit | TurnOutcome::Over => {
                writeln!(output, "The game is over.")?;
                return Ok(EndReason::Quit);
            }
            TurnOutcome::Rejected(err) => writeln!(output, "{err}")?,
            TurnOutcome::Miss(_) => {
                print_history(session, &mut output)?;
                writeln!(output, "{}", render_wrong_letters(session.wrong_letters()))?;
            }
            TurnOutcome::Win { turns, elapsed, .. } => {
                print_history(session, &mut output)?;
                writeln!(output, "Correct!")?;
                if turns == 1 {
                    writeln!(output, "Amazing luck! The solution was found at once.")?;
                } else {
                    writeln!(
                        output,
                        "The solution was found after {turns} tries in {} seconds.",
                        elapsed.as_secs()
                    )?;
                }
                return Ok(EndReason::Win);
            }
        }
    }
}

fn print_history<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    for clue in session.history() {
        writeln!(output, "{}", render_clue(clue))?;
    }
    Ok(())
}

/// Read one line without its terminator; `None` at end of input
///
/// Bytes that are not UTF-8 become replacement characters, so the guess is rejected
/// as invalid instead of ending the game.
fn read_guess<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let bytes = input
        .read_until(b'\n', &mut buf)
        .context("failed to read guess")?;

    if bytes == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
