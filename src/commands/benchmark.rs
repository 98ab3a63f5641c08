//! Benchmark command
//!
//! Times the solver over random start/end pairs drawn from one word set.

use super::progress_bar;
use crate::core::Word;
use crate::error::LadderError;
use crate::solver::{Ladder, MIN_WORD_LENGTH, PathFinder, SearchConfig};
use crate::wordlists::WordSet;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    /// Number of random pairs to solve
    pub count: usize,
    /// Fixed seed for reproducible pair selection; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count, seed: None }
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub word_length: usize,
    pub candidates: usize,
    pub total_queries: usize,
    pub solved: usize,
    pub unsolvable: usize,
    /// Solved ladder lengths (in words) to how often they occurred
    pub distribution: BTreeMap<usize, usize>,
    pub average_length: f64,
    pub longest: Option<Ladder>,
    pub total_expanded: usize,
    pub slowest: Duration,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Sample `count` random pairs from the set
///
/// Pairs may repeat and a pair may have equal start and end.
#[must_use]
pub fn sample_pairs(words: &WordSet, count: usize, seed: Option<u64>) -> Vec<(Word, Word)> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    (0..count)
        .filter_map(|_| {
            let start = words.words().choose(&mut rng)?;
            let end = words.words().choose(&mut rng)?;
            Some((start.clone(), end.clone()))
        })
        .collect()
}

/// Run the solver on random pairs from `words`
///
/// # Errors
///
/// Returns `InvalidArgument` if the set's word length is below
/// [`MIN_WORD_LENGTH`].
pub fn run_benchmark(
    words: &WordSet,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, LadderError> {
    if words.word_length() < MIN_WORD_LENGTH {
        return Err(LadderError::invalid(format!(
            "benchmark word length must be at least {MIN_WORD_LENGTH}, got {}",
            words.word_length()
        )));
    }

    let pairs = sample_pairs(words, config.count, config.seed);

    let pb = progress_bar(pairs.len());
    let start = Instant::now();
    let mut solved = 0;
    let mut total_words = 0;
    let mut total_expanded = 0;
    let mut slowest = Duration::ZERO;
    let mut longest: Option<Ladder> = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for (from, to) in &pairs {
        let finder = PathFinder::new(words, from.text(), to.text(), SearchConfig::default())?;
        let outcome = finder.search();

        let stats = outcome.stats();
        total_expanded += stats.expanded;
        slowest = slowest.max(stats.elapsed);

        if let Some(ladder) = outcome.into_ladder() {
            solved += 1;
            total_words += ladder.len();
            *distribution.entry(ladder.len()).or_insert(0) += 1;
            if longest.as_ref().is_none_or(|l| ladder.len() > l.len()) {
                longest = Some(ladder);
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();
    let total_queries = pairs.len();
    let secs = duration.as_secs_f64();

    Ok(BenchmarkResult {
        word_length: words.word_length(),
        candidates: words.len(),
        total_queries,
        solved,
        unsolvable: total_queries - solved,
        distribution,
        average_length: if solved == 0 {
            0.0
        } else {
            total_words as f64 / solved as f64
        },
        longest,
        total_expanded,
        slowest,
        duration,
        queries_per_second: if secs > 0.0 {
            total_queries as f64 / secs
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::CaseMode;

    fn words() -> WordSet {
        WordSet::from_lines(
            [
                "cat", "cot", "cog", "dog", "dot", "bat", "bag", "big", "bog", "zzz",
            ],
            3,
            CaseMode::Sensitive,
        )
    }

    fn seeded(count: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(seed),
        }
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&words(), &seeded(25, 7)).unwrap();

        assert_eq!(result.total_queries, 25);
        assert_eq!(result.word_length, 3);
        assert_eq!(result.candidates, 10);
        assert!(result.total_expanded >= result.total_queries);
    }

    #[test]
    fn benchmark_counts_add_up() {
        let result = run_benchmark(&words(), &seeded(40, 3)).unwrap();

        assert_eq!(result.solved + result.unsolvable, result.total_queries);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);

        if let Some(longest) = &result.longest {
            assert!(result.distribution.keys().all(|&len| len <= longest.len()));
            assert!(result.average_length <= longest.len() as f64);
            assert!(result.average_length >= 1.0);
        }
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let set = words();
        assert_eq!(sample_pairs(&set, 15, Some(42)), sample_pairs(&set, 15, Some(42)));

        let first = run_benchmark(&set, &seeded(15, 42)).unwrap();
        let second = run_benchmark(&set, &seeded(15, 42)).unwrap();
        assert_eq!(first.solved, second.solved);
        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.longest, second.longest);
    }

    #[test]
    fn benchmark_empty_word_set() {
        let set = WordSet::from_lines(Vec::<&str>::new(), 4, CaseMode::Sensitive);
        let result = run_benchmark(&set, &BenchmarkConfig::new(10)).unwrap();

        assert_eq!(result.total_queries, 0);
        assert_eq!(result.solved, 0);
        assert!(result.longest.is_none());
        assert!(result.average_length.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_rejects_single_letter_words() {
        let set = WordSet::from_lines(["a", "b"], 1, CaseMode::Sensitive);
        assert!(matches!(
            run_benchmark(&set, &BenchmarkConfig::new(5)),
            Err(LadderError::InvalidArgument(_))
        ));
    }
}
