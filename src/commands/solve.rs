//! Ladder solving command
//!
//! Solves a single start/end query against a dictionary file.

use crate::error::LadderError;
use crate::solver::{Ladder, PathFinder, SearchConfig, SearchStats, validate_query};
use crate::wordlists::{CaseMode, WordSet};
use std::path::PathBuf;

/// Configuration for solving one ladder
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub dictionary: PathBuf,
    pub start: String,
    pub end: String,
    pub case: CaseMode,
    pub verbose: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(dictionary: impl Into<PathBuf>, start: String, end: String) -> Self {
        Self {
            dictionary: dictionary.into(),
            start,
            end,
            case: CaseMode::Insensitive,
            verbose: false,
        }
    }
}

/// Result of solving a ladder
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Start and end as searched (after case normalization)
    pub start: String,
    pub end: String,
    /// `None` when no ladder connects the two words
    pub ladder: Option<Ladder>,
    pub stats: SearchStats,
    /// Dictionary words of the query's length
    pub candidates: usize,
}

impl SolveResult {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.ladder.is_some()
    }
}

/// Load the dictionary and solve the configured query
///
/// The query is validated before the dictionary is read.
///
/// # Errors
///
/// - `InvalidArgument` / `LengthMismatch` for a malformed start/end pair
/// - `NotFound` if the dictionary cannot be read
pub fn solve_ladder(config: &SolveConfig) -> Result<SolveResult, LadderError> {
    let (start, _) = validate_query(&config.start, &config.end, config.case)?;
    let words = WordSet::from_file(&config.dictionary, start.len(), config.case)?;
    solve_in(&words, &config.start, &config.end, config.verbose)
}

/// Solve a query against an already loaded word set
///
/// # Errors
///
/// Same query validation errors as [`solve_ladder`].
pub fn solve_in(
    words: &WordSet,
    start: &str,
    end: &str,
    verbose: bool,
) -> Result<SolveResult, LadderError> {
    let finder = PathFinder::new(words, start, end, SearchConfig { verbose })?;
    let outcome = finder.search();

    Ok(SolveResult {
        start: finder.start().text().to_string(),
        end: finder.goal().text().to_string(),
        stats: *outcome.stats(),
        ladder: outcome.into_ladder(),
        candidates: words.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn dictionary(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_ladder_solve_{}_{name}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn solve_from_file_succeeds() {
        let path = dictionary("flux", "Flux\nflex\nFlem\nalem\ngold\ntree\nfluxes\n");
        let config = SolveConfig::new(&path, "flux".to_string(), "alem".to_string());
        let result = solve_ladder(&config).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(result.is_solved());
        assert_eq!(
            result.ladder.unwrap().texts(),
            vec!["flux", "flex", "flem", "alem"]
        );
        assert_eq!(result.candidates, 6);
    }

    #[test]
    fn solve_normalizes_case_by_default() {
        let path = dictionary("case", "IF\nIn\n");
        let config = SolveConfig::new(&path, "If".to_string(), "IN".to_string());
        let result = solve_ladder(&config).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(result.start, "if");
        assert_eq!(result.end, "in");
        assert_eq!(result.ladder.unwrap().texts(), vec!["if", "in"]);
    }

    #[test]
    fn solve_reports_no_ladder() {
        let path = dictionary("nopath", "bar\nboo\n");
        let config = SolveConfig::new(&path, "bar".to_string(), "boo".to_string());
        let result = solve_ladder(&config).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(!result.is_solved());
        assert!(result.ladder.is_none());
    }

    #[test]
    fn solve_missing_dictionary_is_not_found() {
        let config = SolveConfig::new("/does/not/exist", "flux".to_string(), "alem".to_string());
        assert!(matches!(
            solve_ladder(&config),
            Err(LadderError::NotFound { .. })
        ));
    }

    #[test]
    fn solve_validates_before_loading() {
        // Bad query wins over the missing file
        let config = SolveConfig::new("/does/not/exist", "flux".to_string(), "al".to_string());
        assert!(matches!(
            solve_ladder(&config),
            Err(LadderError::LengthMismatch { .. })
        ));

        let config = SolveConfig::new("/does/not/exist", "f".to_string(), "a".to_string());
        assert!(matches!(
            solve_ladder(&config),
            Err(LadderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn solve_in_uses_loaded_set() {
        let words = WordSet::from_lines(["bar", "bor", "boo"], 3, CaseMode::Sensitive);
        let result = solve_in(&words, "bar", "boo", false).unwrap();
        assert_eq!(result.ladder.unwrap().texts(), vec!["bar", "bor", "boo"]);
        assert!(result.stats.expanded >= 3);
    }
}
