//! Predecessor links and path reconstruction

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// A found ladder, start to goal inclusive
///
/// Always holds at least one word; a start equal to the goal yields a
/// single-word ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    words: Vec<Word>,
}

impl Ladder {
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words, including start and goal
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a ladder contains at least its start word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of single-letter changes
    #[must_use]
    pub fn steps(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn start(&self) -> Option<&Word> {
        self.words.first()
    }

    #[must_use]
    pub fn goal(&self) -> Option<&Word> {
        self.words.last()
    }

    /// Words as plain strings, handy for comparisons
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.texts().join(" → "))
    }
}

/// Best-known predecessor of every reached word
///
/// The links form a tree rooted at the start word, which never gets a
/// predecessor of its own.
#[derive(Debug, Default)]
pub(crate) struct Predecessors<'w> {
    links: FxHashMap<&'w Word, &'w Word>,
}

impl<'w> Predecessors<'w> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the predecessor of `word`
    pub(crate) fn link(&mut self, word: &'w Word, from: &'w Word) {
        self.links.insert(word, from);
    }

    #[cfg(test)]
    pub(crate) fn get(&self, word: &Word) -> Option<&'w Word> {
        self.links.get(word).copied()
    }

    /// Walk back from `goal` until a word with no predecessor, then reverse
    pub(crate) fn reconstruct(&self, goal: &'w Word) -> Ladder {
        let mut path = vec![goal.clone()];
        let mut current = goal;

        // Never more hops than links
        for _ in 0..self.links.len() {
            match self.links.get(current) {
                Some(&previous) => {
                    path.push(previous.clone());
                    current = previous;
                }
                None => break,
            }
        }

        path.reverse();
        Ladder { words: path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn reconstruct_single_word() {
        let start = w("flux");
        let links = Predecessors::new();
        let ladder = links.reconstruct(&start);
        assert_eq!(ladder.texts(), vec!["flux"]);
        assert_eq!(ladder.steps(), 0);
        assert!(!ladder.is_empty());
    }

    #[test]
    fn reconstruct_follows_links_backwards() {
        let (flux, flex, flem, alem) = (w("flux"), w("flex"), w("flem"), w("alem"));
        let mut links = Predecessors::new();
        links.link(&flex, &flux);
        links.link(&flem, &flex);
        links.link(&alem, &flem);

        let ladder = links.reconstruct(&alem);
        assert_eq!(ladder.texts(), vec!["flux", "flex", "flem", "alem"]);
        assert_eq!(ladder.len(), 4);
        assert_eq!(ladder.steps(), 3);
        assert_eq!(ladder.start(), Some(&flux));
        assert_eq!(ladder.goal(), Some(&alem));
    }

    #[test]
    fn link_overwrites_previous_predecessor() {
        let (a, b, c) = (w("aa"), w("ab"), w("bb"));
        let mut links = Predecessors::new();
        links.link(&c, &a);
        links.link(&c, &b);
        assert_eq!(links.get(&c), Some(&b));
    }

    #[test]
    fn reconstruct_stops_on_cycle() {
        let (a, b) = (w("aa"), w("ab"));
        let mut links = Predecessors::new();
        links.link(&a, &b);
        links.link(&b, &a);

        let ladder = links.reconstruct(&a);
        assert_eq!(ladder.len(), 3);
    }

    #[test]
    fn ladder_display_joins_with_arrows() {
        let (bar, bor, boo) = (w("bar"), w("bor"), w("boo"));
        let mut links = Predecessors::new();
        links.link(&bor, &bar);
        links.link(&boo, &bor);
        assert_eq!(links.reconstruct(&boo).to_string(), "bar → bor → boo");
    }
}
