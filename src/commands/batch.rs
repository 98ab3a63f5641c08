//! Batch command - solve many ladders at once
//!
//! Reads `start end` pairs from a file and solves them in parallel. Every
//! query owns its search state; only the per-length word sets are shared.

use super::progress_bar;
use crate::error::LadderError;
use crate::solver::{PathFinder, SearchConfig, SearchOutcome, validate_query};
use crate::wordlists::loader::{load_lines, read_text};
use crate::wordlists::{CaseMode, WordSet};
use colored::Colorize;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::time::{Duration, Instant};

/// One query read from a pairs file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    /// 1-based line number in the source file
    pub line: usize,
    pub start: String,
    pub end: String,
}

/// Outcome of a single batch query
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub pair: QueryPair,
    pub outcome: Result<SearchOutcome, LadderError>,
}

/// Summary of a batch run
#[derive(Debug)]
pub struct BatchResult {
    /// Entries in input order
    pub entries: Vec<BatchEntry>,
    pub solved: usize,
    pub unsolvable: usize,
    pub failed: usize,
    pub duration: Duration,
}

/// Parse `start end` pairs, one per line; blank lines are skipped
///
/// # Errors
///
/// Returns `InvalidArgument` naming the first line that does not hold
/// exactly two words.
///
/// # Examples
/// ```
/// use word_ladder::commands::parse_pairs;
///
/// let pairs = parse_pairs("flux alem\n\nbar boo\n").unwrap();
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[1].line, 3);
/// assert!(parse_pairs("flux\n").is_err());
/// ```
pub fn parse_pairs(content: &str) -> Result<Vec<QueryPair>, LadderError> {
    let mut pairs = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        match fields.as_slice() {
            [] => {}
            [start, end] => pairs.push(QueryPair {
                line,
                start: (*start).to_string(),
                end: (*end).to_string(),
            }),
            _ => {
                return Err(LadderError::invalid(format!(
                    "line {line}: expected 'start end', got '{}'",
                    raw.trim()
                )));
            }
        }
    }

    Ok(pairs)
}

/// Read and parse a pairs file
///
/// # Errors
///
/// `NotFound` if the file cannot be read, `InvalidArgument` for a malformed
/// line.
pub fn read_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<QueryPair>, LadderError> {
    parse_pairs(&read_text(path)?)
}

/// Load a dictionary and solve every pair against it
///
/// # Errors
///
/// Returns `NotFound` if the dictionary cannot be read. Per-query problems
/// (bad words, mismatched lengths) are recorded in the entries instead.
pub fn run_batch<P: AsRef<Path>>(
    dictionary: P,
    pairs: &[QueryPair],
    case: CaseMode,
    verbose: bool,
) -> Result<BatchResult, LadderError> {
    let lines = load_lines(dictionary)?;
    Ok(solve_batch(&lines, pairs, case, verbose))
}

/// Solve pairs against in-memory dictionary lines
///
/// Each query is validated and case-normalized first; one word set is then
/// built per distinct normalized start length and shared read-only by all
/// queries of that length.
#[must_use]
pub fn solve_batch<S: AsRef<str> + Sync>(
    lines: &[S],
    pairs: &[QueryPair],
    case: CaseMode,
    verbose: bool,
) -> BatchResult {
    let start_time = Instant::now();

    let queries: Vec<Result<usize, LadderError>> = pairs
        .iter()
        .map(|pair| {
            validate_query(&pair.start, &pair.end, case).map(|(start, _)| start.len())
        })
        .collect();

    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    let mut sets: FxHashMap<usize, WordSet> = FxHashMap::default();
    for &length in queries.iter().flatten() {
        sets.entry(length)
            .or_insert_with(|| WordSet::from_lines(lines.iter().copied(), length, case));
    }

    let pb = progress_bar(pairs.len());

    let entries: Vec<BatchEntry> = pairs
        .par_iter()
        .zip(queries.par_iter())
        .map(|(pair, query)| {
            let outcome = query.clone().and_then(|length| {
                let words = &sets[&length];
                let finder =
                    PathFinder::new(words, &pair.start, &pair.end, SearchConfig::default())?;
                let outcome = finder.search();
                if verbose {
                    pb.suspend(|| eprintln!("{}", finder.summary_line(&outcome).dimmed()));
                }
                Ok(outcome)
            });
            pb.inc(1);
            BatchEntry {
                pair: pair.clone(),
                outcome,
            }
        })
        .collect();

    pb.finish_and_clear();

    let solved = entries
        .iter()
        .filter(|e| matches!(&e.outcome, Ok(o) if o.is_found()))
        .count();
    let failed = entries.iter().filter(|e| e.outcome.is_err()).count();

    BatchResult {
        unsolvable: entries.len() - solved - failed,
        solved,
        failed,
        entries,
        duration: start_time.elapsed(),
    }
}
