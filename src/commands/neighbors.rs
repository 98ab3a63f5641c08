//! Neighbor listing command
//!
//! Shows every dictionary word one substitution away from a given word.

use crate::core::Word;
use crate::error::LadderError;
use crate::solver::neighbors;
use crate::wordlists::{CaseMode, WordSet};
use std::path::Path;

/// Result of a neighbor lookup
#[derive(Debug, Clone)]
pub struct NeighborsResult {
    pub word: Word,
    /// Whether the word itself is in the dictionary
    pub in_dictionary: bool,
    pub neighbors: Vec<Word>,
}

/// List the one-step neighbors of `word` in `words`
///
/// # Errors
///
/// - `InvalidArgument` if `word` is empty or contains whitespace
/// - `LengthMismatch` if the word set holds words of another length
pub fn list_neighbors(word: &str, words: &WordSet) -> Result<NeighborsResult, LadderError> {
    let word = words
        .case_mode()
        .word(word)
        .map_err(|e| LadderError::invalid(format!("'{word}' is not a valid word: {e}")))?;

    if word.len() != words.word_length() {
        return Err(LadderError::LengthMismatch {
            expected: word.len(),
            found: words.word_length(),
        });
    }

    let found = neighbors(&word, words).into_iter().cloned().collect();

    Ok(NeighborsResult {
        in_dictionary: words.contains(word.text()),
        word,
        neighbors: found,
    })
}

/// Load the dictionary words of `word`'s length and list its neighbors
///
/// The word is case-normalized before its length is taken, so the loaded
/// set always matches the looked-up word.
///
/// # Errors
///
/// `InvalidArgument` for a bad word (checked before the file is read),
/// `NotFound` if the dictionary cannot be read.
pub fn neighbors_from_file<P: AsRef<Path>>(
    dictionary: P,
    word: &str,
    case: CaseMode,
) -> Result<NeighborsResult, LadderError> {
    let length = case
        .word(word)
        .map_err(|e| LadderError::invalid(format!("'{word}' is not a valid word: {e}")))?
        .len();
    let words = WordSet::from_file(dictionary, length, case)?;
    list_neighbors(word, &words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_neighbors_in_dictionary_order() {
        let words = WordSet::from_lines(["cot", "cat", "dog", "bat", "cut"], 3, CaseMode::Sensitive);
        let result = list_neighbors("cat", &words).unwrap();

        let texts: Vec<&str> = result.neighbors.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cot", "bat", "cut"]);
        assert!(result.in_dictionary);
    }

    #[test]
    fn word_outside_dictionary_still_has_neighbors() {
        let words = WordSet::from_lines(["flex", "flox"], 4, CaseMode::Sensitive);
        let result = list_neighbors("flux", &words).unwrap();
        assert!(!result.in_dictionary);
        assert_eq!(result.neighbors.len(), 2);
    }

    #[test]
    fn lookup_follows_case_mode() {
        let words = WordSet::from_lines(["IN", "on"], 2, CaseMode::Insensitive);
        let result = list_neighbors("If", &words).unwrap();
        assert_eq!(result.word.text(), "if");
        let texts: Vec<&str> = result.neighbors.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["in"]);
    }

    #[test]
    fn rejects_wrong_length_and_bad_words() {
        let words = WordSet::from_lines(["cat"], 3, CaseMode::Sensitive);
        assert!(matches!(
            list_neighbors("flux", &words),
            Err(LadderError::LengthMismatch { .. })
        ));
        assert!(matches!(
            list_neighbors("", &words),
            Err(LadderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_file_uses_normalized_length() {
        let path = std::env::temp_dir().join(format!(
            "word_ladder_neighbors_{}_dotted.txt",
            std::process::id()
        ));
        fs::write(&path, "İF\nİN\nif\nin\n").unwrap();
        let result = neighbors_from_file(&path, "İF", CaseMode::Insensitive);
        fs::remove_file(&path).unwrap();

        let result = result.unwrap();
        assert_eq!(result.word.text(), "i\u{307}f");
        assert!(result.in_dictionary);
        let texts: Vec<&str> = result.neighbors.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["i\u{307}n"]);
    }

    #[test]
    fn from_file_checks_word_before_reading() {
        assert!(matches!(
            neighbors_from_file("/does/not/exist", "two words", CaseMode::Sensitive),
            Err(LadderError::InvalidArgument(_))
        ));
        assert!(matches!(
            neighbors_from_file("/does/not/exist", "flux", CaseMode::Sensitive),
            Err(LadderError::NotFound { .. })
        ));
    }
}
