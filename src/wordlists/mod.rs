//! Word lists for ladder solving
//!
//! A [`WordSet`] is the vertex set of the implicit search graph: every
//! distinct dictionary word of one length, in first-seen order.

pub mod loader;

use crate::core::Word;
use crate::error::LadderError;
use rustc_hash::FxHashSet;
use std::path::Path;

/// How dictionary text is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Keep words exactly as they appear in the source
    #[default]
    Sensitive,
    /// Lowercase every word before filtering and matching
    Insensitive,
}

impl CaseMode {
    /// Build a Word from raw text according to this mode
    ///
    /// # Errors
    /// Returns `WordError` if the text is not a valid word.
    pub fn word(self, text: &str) -> Result<Word, crate::core::WordError> {
        match self {
            Self::Sensitive => Word::new(text),
            Self::Insensitive => Word::lowercase(text),
        }
    }
}

/// Distinct words of a single length
///
/// Built once and only read by searches, so it can be shared across threads.
#[derive(Debug, Clone)]
pub struct WordSet {
    words: Vec<Word>,
    members: FxHashSet<Word>,
    length: usize,
    case: CaseMode,
}

impl WordSet {
    /// Load a dictionary file and keep the words of `length` characters
    ///
    /// # Errors
    ///
    /// Returns `LadderError::NotFound` if the path is missing, is not a
    /// regular file, or cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use word_ladder::wordlists::{CaseMode, WordSet};
    ///
    /// let words = WordSet::from_file("/usr/share/dict/words", 4, CaseMode::Insensitive).unwrap();
    /// println!("Loaded {} four-letter words", words.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        length: usize,
        case: CaseMode,
    ) -> Result<Self, LadderError> {
        let lines = loader::load_lines(path)?;
        Ok(Self::from_lines(lines, length, case))
    }

    /// Build a set from in-memory lines
    ///
    /// Lines are trimmed; blank lines, lines that are not a single word,
    /// duplicates and words of the wrong length are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::wordlists::{CaseMode, WordSet};
    ///
    /// let words = WordSet::from_lines(["Flux", "flux", "flex", "fluxes"], 4, CaseMode::Insensitive);
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("flux"));
    /// ```
    pub fn from_lines<I, S>(lines: I, length: usize, case: CaseMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut members = FxHashSet::default();

        for line in lines {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            let Ok(word) = case.word(trimmed) else {
                continue;
            };
            if word.len() != length {
                continue;
            }
            if members.insert(word.clone()) {
                words.push(word);
            }
        }

        Self {
            words,
            members,
            length,
            case,
        }
    }

    /// All words, in first-seen order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length (in characters) every word in the set has
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn case_mode(&self) -> CaseMode {
        self.case
    }

    /// Check membership by text (already normalized for the case mode)
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.members.contains(text)
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
