//! Word list loading and validation
//!
//! Every line of both files must be a valid word, and every candidate must also be in
//! the full word list. Any failure is fatal for the process.

use super::WordList;
use crate::core::{Word, is_word_valid};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Fatal problem with the word list files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The words file {0} doesn't exist.")]
    MissingWordsFile(String),
    #[error("The candidate words file {0} doesn't exist.")]
    MissingCandidatesFile(String),
    #[error("{count} invalid words were found in the {file} file.")]
    InvalidWords { count: usize, file: String },
    #[error("{count} candidate words are not included in the {file} file.")]
    CandidatesNotInDictionary { count: usize, file: String },
    #[error("Failed to read {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Process exit status for this failure
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingWordsFile(_) => 3,
            Self::MissingCandidatesFile(_) => 4,
            Self::InvalidWords { .. } => 5,
            Self::CandidatesNotInDictionary { .. } => 6,
            Self::Read { .. } => 7,
        }
    }
}

/// Validate every line of a word list
///
/// Lines are taken as-is: blank lines and surrounding whitespace make a line invalid.
///
/// # Errors
///
/// Returns `LoadError::InvalidWords` with the number of failing lines.
pub fn check_word_list<S: AsRef<str>>(lines: &[S], file: &str) -> Result<WordList, LoadError> {
    let count = lines.iter().filter(|l| !is_word_valid(l.as_ref())).count();
    if count > 0 {
        return Err(LoadError::InvalidWords {
            count,
            file: file.to_string(),
        });
    }

    Ok(lines.iter().filter_map(|l| Word::new(l.as_ref()).ok()).collect())
}

/// Ensure every candidate line names a word in the full word list
///
/// Repeated lines are counted once per line.
///
/// # Errors
///
/// Returns `LoadError::CandidatesNotInDictionary` with the number of missing candidates.
pub fn check_candidates<S: AsRef<str>>(
    words: &WordList,
    candidate_lines: &[S],
    words_file: &str,
) -> Result<(), LoadError> {
    let count = candidate_lines
        .iter()
        .filter(|c| !words.contains_str(c.as_ref()))
        .count();

    if count > 0 {
        return Err(LoadError::CandidatesNotInDictionary {
            count,
            file: words_file.to_string(),
        });
    }
    Ok(())
}

/// Validate both lists from already-read lines
///
/// Returns (`words`, `candidates`).
///
/// # Errors
///
/// Returns the first failing check: words file, candidates file, then candidate inclusion.
pub fn validate_word_lists<S: AsRef<str>>(
    word_lines: &[S],
    words_file: &str,
    candidate_lines: &[S],
    candidates_file: &str,
) -> Result<(WordList, WordList), LoadError> {
    let words = check_word_list(word_lines, words_file)?;
    let candidates = check_word_list(candidate_lines, candidates_file)?;
    check_candidates(&words, candidate_lines, words_file)?;

    debug!(
        "loaded {} words and {} candidates",
        words.len(),
        candidates.len()
    );
    Ok((words, candidates))
}

/// Load and validate both word list files
///
/// Returns (`words`, `candidates`).
///
/// # Errors
///
/// Returns `LoadError` if a file is missing or unreadable, or if validation fails.
///
/// # Examples
/// ```no_run
/// use words_virtuoso::wordlists::load_word_lists;
///
/// let (words, candidates) = load_word_lists("words.txt", "candidates.txt").unwrap();
/// println!("{} words, {} candidates", words.len(), candidates.len());
/// ```
pub fn load_word_lists<P: AsRef<Path>>(
    words_path: P,
    candidates_path: P,
) -> Result<(WordList, WordList), LoadError> {
    let words_path = words_path.as_ref();
    let candidates_path = candidates_path.as_ref();
    let words_file = words_path.display().to_string();
    let candidates_file = candidates_path.display().to_string();

    if !words_path.exists() {
        return Err(LoadError::MissingWordsFile(words_file));
    }
    if !candidates_path.exists() {
        return Err(LoadError::MissingCandidatesFile(candidates_file));
    }

    let word_lines = read_lines(words_path, &words_file)?;
    let candidate_lines = read_lines(candidates_path, &candidates_file)?;

    validate_word_lists(&word_lines, &words_file, &candidate_lines, &candidates_file)
}

fn read_lines(path: &Path, file: &str) -> Result<Vec<String>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        file: file.to_string(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_list(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn check_word_list_accepts_valid_lines() {
        let words = check_word_list(&["crane", "TRACE", "Slate"], "words.txt").unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains_str("trace"));
    }

    #[test]
    fn check_word_list_counts_invalid_lines() {
        let err = check_word_list(&["crane", "hello", "wor1d", "", "toolong"], "words.txt")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidWords { count: 4, ref file } if file == "words.txt"
        ));
        assert_eq!(
            err.to_string(),
            "4 invalid words were found in the words.txt file."
        );
    }

    #[test]
    fn check_word_list_rejects_padded_lines() {
        assert!(check_word_list(&[" crane"], "words.txt").is_err());
    }

    #[test]
    fn candidates_must_be_in_dictionary() {
        let err = validate_word_lists(
            &["crane", "trace", "slate"],
            "words.txt",
            &["CRANE", "fight", "brick"],
            "candidates.txt",
        )
        .unwrap_err();

        assert!(matches!(
            err,
            LoadError::CandidatesNotInDictionary { count: 2, .. }
        ));
        assert_eq!(
            err.to_string(),
            "2 candidate words are not included in the words.txt file."
        );
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn repeated_missing_candidates_counted_per_line() {
        let err =
            validate_word_lists(&["crane"], "w", &["slate", "slate", "SLATE"], "c").unwrap_err();
        assert!(matches!(
            err,
            LoadError::CandidatesNotInDictionary { count: 3, .. }
        ));
    }

    #[test]
    fn candidate_check_is_case_insensitive() {
        let (words, candidates) =
            validate_word_lists(&["Crane", "TRACE"], "w", &["crane", "Trace"], "c").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn words_file_checked_before_candidates_file() {
        let err = validate_word_lists(&["hello"], "w", &["hello", "world"], "c").unwrap_err();
        assert!(matches!(err, LoadError::InvalidWords { count: 1, ref file } if file == "w"));
    }

    #[test]
    fn invalid_candidates_reported_before_inclusion() {
        let err = validate_word_lists(&["crane"], "w", &["zzzzz", "trace"], "c").unwrap_err();
        assert!(matches!(err, LoadError::InvalidWords { count: 1, ref file } if file == "c"));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn load_from_files() {
        let words = temp_list("crane\ntrace\nslate\n");
        let candidates = temp_list("trace\r\nCRANE\n");

        let (words, candidates) = load_word_lists(words.path(), candidates.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn load_rejects_blank_lines() {
        let words = temp_list("crane\n\ntrace\n");
        let candidates = temp_list("crane\n");

        let err = load_word_lists(words.path(), candidates.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidWords { count: 1, .. }));
    }

    #[test]
    fn load_missing_words_file() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = temp_list("crane\n");
        let missing = dir.path().join("nope.txt");

        let err = load_word_lists(missing.as_path(), candidates.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingWordsFile(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn load_missing_candidates_file() {
        let dir = tempfile::tempdir().unwrap();
        let words = temp_list("crane\n");
        let missing = dir.path().join("nope.txt");

        let err = load_word_lists(words.path(), missing.as_path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingCandidatesFile(_)));
        assert_eq!(err.exit_code(), 4);
    }
}
