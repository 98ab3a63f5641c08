//! Word ladder search
//!
//! A* over the implicit graph of same-length dictionary words.

mod engine;
mod frontier;
mod neighbors;
mod path;

pub use engine::{
    MIN_WORD_LENGTH, PathFinder, SearchConfig, SearchOutcome, SearchStats, validate_query,
};
pub use neighbors::neighbors;
pub use path::Ladder;

use crate::error::LadderError;
use crate::wordlists::WordSet;

/// Find the shortest ladder from `start` to `goal`
///
/// Returns `Ok(None)` when no ladder exists; that is a valid outcome, not
/// an error.
///
/// # Errors
///
/// Returns `InvalidArgument` or `LengthMismatch` if the query is malformed;
/// see [`PathFinder::new`].
///
/// # Examples
/// ```
/// use word_ladder::solver::search;
/// use word_ladder::wordlists::{CaseMode, WordSet};
///
/// let words = WordSet::from_lines(["bar", "bor", "boo"], 3, CaseMode::Sensitive);
/// let ladder = search(&words, "bar", "boo").unwrap().unwrap();
/// assert_eq!(ladder.texts(), vec!["bar", "bor", "boo"]);
///
/// let words = WordSet::from_lines(["bar", "boo"], 3, CaseMode::Sensitive);
/// assert!(search(&words, "bar", "boo").unwrap().is_none());
/// ```
pub fn search(words: &WordSet, start: &str, goal: &str) -> Result<Option<Ladder>, LadderError> {
    let finder = PathFinder::new(words, start, goal, SearchConfig::default())?;
    Ok(finder.search().into_ladder())
}
