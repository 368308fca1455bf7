//! Game session state machine
//!
//! A session owns the secret word and everything learned so far. Each call to
//! `submit` processes one input line and returns what happened, so turn transitions
//! can be driven and inspected without a terminal.

use super::picker::SecretPicker;
use crate::core::{Clue, Word, WordError};
use crate::wordlists::WordList;
use log::debug;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Command that ends the game without a win
pub const EXIT_COMMAND: &str = "exit";

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    Win,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Ended(EndReason),
}

/// Reason a guess was not accepted; the session keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("The input isn't a 5-letter word.")]
    WrongLength,
    #[error("One or more letters of the input aren't valid.")]
    InvalidCharacters,
    #[error("The input has duplicate letters.")]
    DuplicateLetters,
    #[error("The input word isn't included in my words list.")]
    NotInWordList,
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(_) => Self::WrongLength,
            WordError::InvalidCharacters(_) => Self::InvalidCharacters,
            WordError::DuplicateLetters => Self::DuplicateLetters,
        }
    }
}

/// Result of submitting one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Player typed the exit command
    Quit,
    /// Guess failed validation
    Rejected(GuessError),
    /// Valid guess that is not the secret
    Miss(Clue),
    /// Secret found
    Win {
        clue: Clue,
        turns: u32,
        elapsed: Duration,
    },
    /// Session had already ended; input ignored
    Over,
}

/// State of one game from secret selection to win or quit
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    history: Vec<Clue>,
    wrong_letters: BTreeSet<char>,
    turns: u32,
    started: Instant,
    state: GameState,
}

impl GameSession {
    /// Start a session with a known secret
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            history: Vec::new(),
            wrong_letters: BTreeSet::new(),
            turns: 0,
            started: Instant::now(),
            state: GameState::AwaitingGuess,
        }
    }

    /// Start a session with a secret chosen from `candidates`
    ///
    /// Returns `None` if the picker cannot choose a word.
    pub fn start<P: SecretPicker + ?Sized>(candidates: &WordList, picker: &mut P) -> Option<Self> {
        picker.pick(candidates.words()).cloned().map(Self::new)
    }

    /// Process one line of player input
    ///
    /// The turn counter advances before any validation, so rejected guesses and the
    /// exit command still use up a turn number.
    pub fn submit(&mut self, input: &str, dictionary: &WordList) -> TurnOutcome {
        if self.is_over() {
            return TurnOutcome::Over;
        }

        self.turns += 1;

        if input.eq_ignore_ascii_case(EXIT_COMMAND) {
            self.state = GameState::Ended(EndReason::Quit);
            return TurnOutcome::Quit;
        }

        let guess = match Self::parse_guess(input, dictionary) {
            Ok(guess) => guess,
            Err(err) => {
                debug!("turn {}: rejected {input:?}: {err:?}", self.turns);
                return TurnOutcome::Rejected(err);
            }
        };

        let clue = Clue::evaluate(&self.secret, &guess);
        self.wrong_letters.extend(clue.absent_letters());
        self.history.push(clue.clone());

        if guess == self.secret {
            self.state = GameState::Ended(EndReason::Win);
            TurnOutcome::Win {
                clue,
                turns: self.turns,
                elapsed: self.elapsed(),
            }
        } else {
            TurnOutcome::Miss(clue)
        }
    }

    fn parse_guess(input: &str, dictionary: &WordList) -> Result<Word, GuessError> {
        let guess = Word::new(input)?;
        if dictionary.contains(&guess) {
            Ok(guess)
        } else {
            Err(GuessError::NotInWordList)
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Clues for every accepted guess, oldest first
    #[must_use]
    pub fn history(&self) -> &[Clue] {
        &self.history
    }

    /// Uppercase letters known not to be in the secret, sorted ascending
    #[must_use]
    pub const fn wrong_letters(&self) -> &BTreeSet<char> {
        &self.wrong_letters
    }

    /// Number of input lines processed so far
    #[must_use]
    pub const fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::Ended(_))
    }

    /// Time since the session started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;
    use crate::game::FixedPicker;

    fn dictionary() -> WordList {
        ["crane", "trace", "slate", "fight", "plumb"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::new(secret).unwrap())
    }

    #[test]
    fn new_session_awaits_guess() {
        let s = session("trace");
        assert_eq!(s.state(), GameState::AwaitingGuess);
        assert_eq!(s.turns(), 0);
        assert!(s.history().is_empty());
        assert!(s.wrong_letters().is_empty());
    }

    #[test]
    fn start_uses_picker() {
        let words = dictionary();
        let s = GameSession::start(&words, &mut FixedPicker::new("slate")).unwrap();
        assert_eq!(s.secret().text(), "slate");
    }

    #[test]
    fn start_with_empty_pool() {
        let empty = WordList::default();
        assert!(GameSession::start(&empty, &mut FixedPicker::new("slate")).is_none());
    }

    #[test]
    fn exit_quits_without_clues() {
        let mut s = session("trace");
        assert_eq!(s.submit("EXIT", &dictionary()), TurnOutcome::Quit);
        assert_eq!(s.state(), GameState::Ended(EndReason::Quit));
        assert!(s.history().is_empty());
    }

    #[test]
    fn rejected_guesses_report_reason() {
        let words = dictionary();
        let mut s = session("trace");

        let cases = [
            ("cran", GuessError::WrongLength),
            ("cr4ne", GuessError::InvalidCharacters),
            ("hello", GuessError::DuplicateLetters),
            ("brick", GuessError::NotInWordList),
        ];
        for (input, expected) in cases {
            assert_eq!(s.submit(input, &words), TurnOutcome::Rejected(expected));
        }

        assert_eq!(s.state(), GameState::AwaitingGuess);
        assert!(s.history().is_empty());
    }

    #[test]
    fn rejected_guesses_consume_turns() {
        let words = dictionary();
        let mut s = session("trace");

        s.submit("oops", &words);
        s.submit("zzzzz", &words);
        assert_eq!(s.turns(), 2);

        match s.submit("trace", &words) {
            TurnOutcome::Win { turns, .. } => assert_eq!(turns, 3),
            other => panic!("expected win, got {other:?}"),
        }
    }

    #[test]
    fn miss_records_clue_and_wrong_letters() {
        let words = dictionary();
        let mut s = session("trace");

        let TurnOutcome::Miss(clue) = s.submit("fight", &words) else {
            panic!("expected miss");
        };
        assert_eq!(clue.marks()[4], Mark::Present);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.wrong_letters().iter().collect::<String>(), "FGHI");

        s.submit("plumb", &words);
        assert_eq!(s.history().len(), 2);
        assert_eq!(
            s.wrong_letters().iter().collect::<String>(),
            "BFGHILMPU"
        );
    }

    #[test]
    fn wrong_letters_never_shrink() {
        let words = dictionary();
        let mut s = session("crane");

        s.submit("slate", &words); // S, L, T absent
        let before = s.wrong_letters().clone();
        s.submit("trace", &words); // T absent again
        assert!(before.is_subset(s.wrong_letters()));
        assert_eq!(s.wrong_letters().iter().collect::<String>(), "LST");
    }

    #[test]
    fn winning_session() {
        let words = dictionary();
        let mut s = session("trace");

        assert!(matches!(s.submit("CRANE", &words), TurnOutcome::Miss(_)));
        assert_eq!(s.turns(), 1);
        assert_eq!(s.history().len(), 1);

        let TurnOutcome::Win { clue, turns, .. } = s.submit("Trace", &words) else {
            panic!("expected win");
        };
        assert!(clue.is_solved());
        assert_eq!(turns, 2);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.state(), GameState::Ended(EndReason::Win));
    }

    #[test]
    fn input_after_end_is_ignored() {
        let words = dictionary();
        let mut s = session("trace");
        s.submit("trace", &words);

        assert_eq!(s.submit("crane", &words), TurnOutcome::Over);
        assert_eq!(s.turns(), 1);
        assert_eq!(s.history().len(), 1);
    }
}
