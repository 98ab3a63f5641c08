//! Mismatch distance between equal-length words
//!
//! Doubles as the A* heuristic and as the step cost between two words.

use super::Word;

/// Count positions where two words differ
///
/// Both words are expected to have the same length; characters past the end
/// of the shorter word are not compared.
///
/// # Examples
/// ```
/// use word_ladder::core::{Word, mismatch};
///
/// let flux = Word::new("flux").unwrap();
/// let alem = Word::new("alem").unwrap();
/// assert_eq!(mismatch(&flux, &alem), 3);
/// assert_eq!(mismatch(&flux, &flux), 0);
/// ```
#[must_use]
pub fn mismatch(a: &Word, b: &Word) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// True when exactly one position differs
#[inline]
#[must_use]
pub fn is_one_step(a: &Word, b: &Word) -> bool {
    let mut differing = a.chars().zip(b.chars()).filter(|(x, y)| x != y);
    differing.next().is_some() && differing.next().is_none()
}
