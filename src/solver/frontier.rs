//! Open set for the ladder search
//!
//! Keeps discovered words in insertion order so that selection can break
//! f-score ties deterministically: the first minimum encountered wins.
//! Membership is tracked separately for O(1) lookups.

use crate::core::Word;
use rustc_hash::FxHashSet;

#[derive(Debug, Default)]
pub(crate) struct OpenSet<'w> {
    order: Vec<&'w Word>,
    members: FxHashSet<&'w Word>,
    high_water: usize,
}

impl<'w> OpenSet<'w> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a word; returns `false` if it was already open
    pub(crate) fn push(&mut self, word: &'w Word) -> bool {
        if !self.members.insert(word) {
            return false;
        }
        self.order.push(word);
        self.high_water = self.high_water.max(self.order.len());
        true
    }

    pub(crate) fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// Remove and return the word with the lowest score
    ///
    /// Scans in insertion order and only replaces the candidate on a strictly
    /// lower score, so among equal scores the earliest-inserted word wins.
    /// The relative order of the remaining words is preserved.
    pub(crate) fn pop_min<F>(&mut self, score: F) -> Option<&'w Word>
    where
        F: Fn(&Word) -> usize,
    {
        let mut best: Option<(usize, usize)> = None;
        for (idx, &word) in self.order.iter().enumerate() {
            let value = score(word);
            if best.is_none_or(|(_, best_value)| value < best_value) {
                best = Some((idx, value));
            }
        }

        let (idx, _) = best?;
        let word = self.order.remove(idx);
        self.members.remove(word);
        Some(word)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Largest size the open set reached
    pub(crate) const fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn push_rejects_duplicates() {
        let w = words(&["ab", "ba"]);
        let mut open = OpenSet::new();
        assert!(open.push(&w[0]));
        assert!(open.push(&w[1]));
        assert!(!open.push(&w[0]));
        assert_eq!(open.len(), 2);
        assert!(open.contains(&w[1]));
    }

    #[test]
    fn pop_min_picks_lowest_score() {
        let w = words(&["aa", "bb", "cc"]);
        let mut open = OpenSet::new();
        for word in &w {
            open.push(word);
        }

        let popped = open.pop_min(|word| if word.text() == "bb" { 1 } else { 5 });
        assert_eq!(popped.map(Word::text), Some("bb"));
        assert!(!open.contains(&w[1]));
        assert_eq!(open.len(), 2);
    }

    #[test]
    fn pop_min_first_minimum_wins() {
        let w = words(&["aa", "bb", "cc"]);
        let mut open = OpenSet::new();
        open.push(&w[2]);
        open.push(&w[0]);
        open.push(&w[1]);

        // All scores tie: insertion order decides
        let order: Vec<&str> = std::iter::from_fn(|| open.pop_min(|_| 3))
            .map(Word::text)
            .collect();
        assert_eq!(order, vec!["cc", "aa", "bb"]);
    }

    #[test]
    fn pop_min_on_empty_is_none() {
        let mut open: OpenSet<'_> = OpenSet::new();
        assert!(open.is_empty());
        assert!(open.pop_min(|_| 0).is_none());
    }

    #[test]
    fn high_water_tracks_peak_size() {
        let w = words(&["aa", "bb", "cc"]);
        let mut open = OpenSet::new();
        open.push(&w[0]);
        open.push(&w[1]);
        let _ = open.pop_min(|_| 0);
        open.push(&w[2]);
        assert_eq!(open.high_water(), 2);
    }
}
