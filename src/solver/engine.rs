//! A* shortest-ladder search
//!
//! Best-first search over the implicit graph whose vertices are the words of
//! a [`WordSet`] and whose edges join words one substitution apart. The
//! mismatch distance to the goal is the heuristic; since it never
//! overestimates and changes by at most one per step, every closed word has
//! its final, optimal g-score.

use super::frontier::OpenSet;
use super::neighbors::neighbors;
use super::path::{Ladder, Predecessors};
use crate::core::{Word, mismatch};
use crate::error::LadderError;
use crate::wordlists::{CaseMode, WordSet};
use colored::Colorize;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Minimum number of characters for start and goal words
pub const MIN_WORD_LENGTH: usize = 2;

/// Options for a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Print elapsed time and a summary line to stderr after searching
    pub verbose: bool,
}

impl SearchConfig {
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

/// Counters gathered while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Words removed from the open set and expanded (goal included)
    pub expanded: usize,
    /// Words ever added to the open set, start included
    pub discovered: usize,
    /// Largest open set size
    pub peak_frontier: usize,
    pub elapsed: Duration,
}

/// Terminal result of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { ladder: Ladder, stats: SearchStats },
    /// The open set emptied without reaching the goal
    NoPath { stats: SearchStats },
}

impl SearchOutcome {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    #[must_use]
    pub const fn ladder(&self) -> Option<&Ladder> {
        match self {
            Self::Found { ladder, .. } => Some(ladder),
            Self::NoPath { .. } => None,
        }
    }

    #[must_use]
    pub fn into_ladder(self) -> Option<Ladder> {
        match self {
            Self::Found { ladder, .. } => Some(ladder),
            Self::NoPath { .. } => None,
        }
    }

    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        match self {
            Self::Found { stats, .. } | Self::NoPath { stats } => stats,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Score {
    g: usize,
    f: usize,
}

/// Shortest-ladder finder bound to a word set and a start/goal pair
///
/// All inputs are validated up front by [`PathFinder::new`]; [`PathFinder::search`]
/// itself cannot fail and may be called repeatedly with identical results.
pub struct PathFinder<'a> {
    words: &'a WordSet,
    start: Word,
    goal: Word,
    config: SearchConfig,
}

impl<'a> PathFinder<'a> {
    /// Validate the query and bind it to `words`
    ///
    /// Start and goal are lowercased when the word set is case-insensitive.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if start or goal is empty, contains whitespace,
    ///   or is shorter than [`MIN_WORD_LENGTH`] characters
    /// - `LengthMismatch` if start and goal differ in length, or if the word
    ///   set holds words of another length
    ///
    /// # Examples
    /// ```
    /// use word_ladder::solver::{PathFinder, SearchConfig};
    /// use word_ladder::wordlists::{CaseMode, WordSet};
    ///
    /// let words = WordSet::from_lines(["flux", "flex", "flem", "alem"], 4, CaseMode::Sensitive);
    /// let finder = PathFinder::new(&words, "flux", "alem", SearchConfig::default()).unwrap();
    /// let ladder = finder.search().into_ladder().unwrap();
    /// assert_eq!(ladder.texts(), vec!["flux", "flex", "flem", "alem"]);
    /// ```
    pub fn new(
        words: &'a WordSet,
        start: &str,
        goal: &str,
        config: SearchConfig,
    ) -> Result<Self, LadderError> {
        let (start, goal) = validate_query(start, goal, words.case_mode())?;

        if words.word_length() != start.len() {
            return Err(LadderError::LengthMismatch {
                expected: start.len(),
                found: words.word_length(),
            });
        }

        Ok(Self {
            words,
            start,
            goal,
            config,
        })
    }

    #[must_use]
    pub const fn start(&self) -> &Word {
        &self.start
    }

    #[must_use]
    pub const fn goal(&self) -> &Word {
        &self.goal
    }

    #[must_use]
    pub const fn words(&self) -> &'a WordSet {
        self.words
    }

    /// Run the search to completion
    #[must_use]
    pub fn search(&self) -> SearchOutcome {
        let started = Instant::now();

        let mut open = OpenSet::new();
        let mut closed: FxHashSet<&Word> = FxHashSet::default();
        let mut scores: FxHashMap<&Word, Score> = FxHashMap::default();
        let mut came_from = Predecessors::new();
        let mut stats = SearchStats::default();

        scores.insert(
            &self.start,
            Score {
                g: 0,
                f: mismatch(&self.start, &self.goal),
            },
        );
        open.push(&self.start);
        stats.discovered = 1;

        let mut found = None;

        while let Some(current) =
            open.pop_min(|word| scores.get(word).map_or(usize::MAX, |score| score.f))
        {
            stats.expanded += 1;

            if *current == self.goal {
                found = Some(came_from.reconstruct(current));
                break;
            }

            closed.insert(current);
            let current_g = scores.get(current).map_or(0, |score| score.g);

            for neighbor in neighbors(current, self.words) {
                if closed.contains(neighbor) {
                    continue;
                }

                let tentative_g = current_g + mismatch(current, neighbor);
                let is_open = open.contains(neighbor);
                let improves = scores
                    .get(neighbor)
                    .is_some_and(|score| tentative_g < score.g);

                if !is_open || improves {
                    came_from.link(neighbor, current);
                    scores.insert(
                        neighbor,
                        Score {
                            g: tentative_g,
                            f: tentative_g + mismatch(neighbor, &self.goal),
                        },
                    );
                    if open.push(neighbor) {
                        stats.discovered += 1;
                    }
                }
            }
        }

        stats.peak_frontier = open.high_water();
        stats.elapsed = started.elapsed();

        let outcome = match found {
            Some(ladder) => SearchOutcome::Found { ladder, stats },
            None => SearchOutcome::NoPath { stats },
        };

        if self.config.verbose {
            eprintln!("{}", self.summary_line(&outcome).dimmed());
        }

        outcome
    }

    /// Human-readable diagnostics for a finished search
    #[must_use]
    pub fn summary_line(&self, outcome: &SearchOutcome) -> String {
        let stats = outcome.stats();
        let result = match outcome.ladder() {
            Some(ladder) => format!("ladder of {} words", ladder.len()),
            None => "no ladder".to_string(),
        };
        format!(
            "{} → {}: {result} in {:.3} ms ({} expanded, {} discovered, peak frontier {}, {} candidate words)",
            self.start,
            self.goal,
            stats.elapsed.as_secs_f64() * 1000.0,
            stats.expanded,
            stats.discovered,
            stats.peak_frontier,
            self.words.len(),
        )
    }
}

/// Check a start/goal pair without touching any word list
///
/// Lets callers reject a malformed query before loading a dictionary.
///
/// # Errors
///
/// `InvalidArgument` for an unusable word, `LengthMismatch` when the two
/// words differ in length.
///
/// # Examples
/// ```
/// use word_ladder::error::LadderError;
/// use word_ladder::solver::validate_query;
/// use word_ladder::wordlists::CaseMode;
///
/// let (start, goal) = validate_query("Flux", "alem", CaseMode::Insensitive).unwrap();
/// assert_eq!(start.text(), "flux");
/// assert_eq!(goal.len(), 4);
///
/// assert!(matches!(
///     validate_query("flux", "flexes", CaseMode::Sensitive),
///     Err(LadderError::LengthMismatch { .. })
/// ));
/// ```
pub fn validate_query(
    start: &str,
    goal: &str,
    case: CaseMode,
) -> Result<(Word, Word), LadderError> {
    let start = endpoint("start", start, case)?;
    let goal = endpoint("end", goal, case)?;

    if start.len() != goal.len() {
        return Err(LadderError::LengthMismatch {
            expected: start.len(),
            found: goal.len(),
        });
    }

    Ok((start, goal))
}

fn endpoint(label: &str, text: &str, case: CaseMode) -> Result<Word, LadderError> {
    let word = case
        .word(text)
        .map_err(|e| LadderError::invalid(format!("{label} '{text}' is not a valid string: {e}")))?;

    if word.len() < MIN_WORD_LENGTH {
        return Err(LadderError::invalid(format!(
            "{label} '{text}' must be at least {MIN_WORD_LENGTH} characters"
        )));
    }

    Ok(word)
}
