//! Words Virtuoso - CLI
//!
//! Guess the secret five-letter word. Exact letters show green, misplaced letters
//! yellow, and absent letters grey.

use anyhow::{Context, Result, bail};
use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use words_virtuoso::{
    commands::run_play,
    game::{GameSession, RandomPicker},
    wordlists::{LoadError, load_word_lists},
};

/// Exit status when the positional arguments are wrong
const USAGE_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "words-virtuoso",
    about = "Guess the secret five-letter word",
    version,
    author
)]
struct Cli {
    /// File with every accepted word, one per line
    words: PathBuf,

    /// File with the words the secret is drawn from, one per line
    candidates: PathBuf,

    /// Seed for choosing the secret word (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_argument_count_error(&err) => {
            log::debug!("argument error: {err}");
            println!("Error: Wrong number of arguments.");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
        Err(err) => err.exit(),
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err}");
            let code = err.downcast_ref::<LoadError>().map_or(1, LoadError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Missing positionals, or an extra one; unknown flags are reported by clap itself
fn is_argument_count_error(err: &clap::Error) -> bool {
    match err.kind() {
        ErrorKind::MissingRequiredArgument => true,
        ErrorKind::UnknownArgument => matches!(
            err.get(ContextKind::InvalidArg),
            Some(ContextValue::String(arg)) if !arg.starts_with('-')
        ),
        _ => false,
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (words, candidates) = load_word_lists(&cli.words, &cli.candidates)?;

    let mut picker = cli.seed.map_or_else(RandomPicker::new, RandomPicker::seeded);
    let Some(mut session) = GameSession::start(&candidates, &mut picker) else {
        bail!("The candidate words file {} is empty.", cli.candidates.display());
    };
    log::trace!("secret word is {}", session.secret());

    let stdin = io::stdin();
    let reason = run_play(&mut session, &words, stdin.lock(), io::stdout().lock())
        .context("game aborted")?;
    log::debug!("game ended: {reason:?} after {} turns", session.turns());

    Ok(())
}
