//! Word list loading utilities
//!
//! Reads line-delimited files (one word per line) and parses length values.

use crate::error::LadderError;
use std::fs;
use std::path::Path;

/// Read the non-blank lines of a file
///
/// # Errors
///
/// Returns `LadderError::NotFound` if the path does not exist, is not a
/// regular file (e.g. a directory), or cannot be read as UTF-8 text.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_lines;
///
/// let lines = load_lines("/usr/share/dict/words").unwrap();
/// println!("Loaded {} lines", lines.len());
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LadderError> {
    let content = read_text(path)?;

    let lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Ok(lines)
}

/// Read a whole line-delimited file
///
/// # Errors
///
/// Returns `LadderError::NotFound` if the path is not a regular, readable
/// UTF-8 file.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, LadderError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(LadderError::not_found(path, "not a regular file"));
    }

    fs::read_to_string(path).map_err(|e| LadderError::not_found(path, e))
}

/// Parse a word length given as text
///
/// # Errors
///
/// Returns `LadderError::InvalidArgument` unless the text is a non-negative
/// integer.
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::parse_word_length;
///
/// assert_eq!(parse_word_length("4").unwrap(), 4);
/// assert!(parse_word_length("four").is_err());
/// ```
pub fn parse_word_length(raw: &str) -> Result<usize, LadderError> {
    raw.trim().parse::<usize>().map_err(|_| {
        LadderError::invalid(format!(
            "cannot reduce by a non-numeric length value: '{raw}'"
        ))
    })
}
