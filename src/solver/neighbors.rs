//! Neighbor discovery
//!
//! The adjacency function of the implicit word graph. Recomputed on demand
//! for every expanded word: O(|words| × length) per call.

use crate::core::{Word, is_one_step};
use crate::wordlists::WordSet;

/// Every word in the set that differs from `word` in exactly one position
///
/// Results follow the set's iteration order. A word is never its own
/// neighbor since it differs in zero positions.
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::solver::neighbors;
/// use word_ladder::wordlists::{CaseMode, WordSet};
///
/// let words = WordSet::from_lines(["bar", "bor", "boo", "car"], 3, CaseMode::Sensitive);
/// let bar = Word::new("bar").unwrap();
/// let found: Vec<&str> = neighbors(&bar, &words).into_iter().map(Word::text).collect();
/// assert_eq!(found, vec!["bor", "car"]);
/// ```
#[must_use]
pub fn neighbors<'a>(word: &Word, words: &'a WordSet) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|&candidate| is_one_step(word, candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mismatch;
    use crate::wordlists::CaseMode;

    fn set(texts: &[&str], length: usize) -> WordSet {
        WordSet::from_lines(texts.iter().copied(), length, CaseMode::Sensitive)
    }

    fn texts<'a>(found: &[&'a Word]) -> Vec<&'a str> {
        found.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn finds_single_substitutions_in_set_order() {
        let words = set(&["flex", "flux", "alem", "flem", "flox"], 4);
        let flux = Word::new("flux").unwrap();
        assert_eq!(texts(&neighbors(&flux, &words)), vec!["flex", "flox"]);
    }

    #[test]
    fn excludes_the_word_itself() {
        let words = set(&["if", "in"], 2);
        let word = Word::new("if").unwrap();
        assert_eq!(texts(&neighbors(&word, &words)), vec!["in"]);
    }

    #[test]
    fn no_neighbors_returns_empty() {
        let words = set(&["gold", "tree", "moon"], 4);
        let word = Word::new("flux").unwrap();
        assert!(neighbors(&word, &words).is_empty());
    }

    #[test]
    fn every_result_has_mismatch_one() {
        let words = set(&["cat", "cot", "cog", "dog", "bat", "bet", "cut"], 3);
        let word = Word::new("cat").unwrap();
        let found = neighbors(&word, &words);
        assert_eq!(texts(&found), vec!["cot", "bat", "cut"]);
        assert!(found.iter().all(|n| mismatch(&word, n) == 1));
    }

    #[test]
    fn deterministic_for_fixed_set() {
        let words = set(&["bar", "bor", "car", "far"], 3);
        let word = Word::new("bar").unwrap();
        assert_eq!(neighbors(&word, &words), neighbors(&word, &words));
    }
}
