//! Word representation
//!
//! A Word is an immutable character sequence; identity is its text.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dictionary word of arbitrary (but fixed) length
///
/// Length is measured in `char`s so that non-ASCII dictionaries compare
/// position by position rather than byte by byte.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Word {
    text: String,
    len: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::ContainsWhitespace => write!(f, "Word must not contain whitespace"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, keeping its case as given
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("flux").unwrap();
    /// assert_eq!(word.text(), "flux");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        let len = text.chars().count();
        Ok(Self { text, len })
    }

    /// Create a lowercased Word
    ///
    /// # Errors
    /// Same conditions as [`Word::new`].
    pub fn lowercase(text: &str) -> Result<Self, WordError> {
        Self::new(text.to_lowercase())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the characters of the word
    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// Hash the text only so `Borrow<str>` lookups agree with `str` hashing
impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
