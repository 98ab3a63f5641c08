//! Command implementations

pub mod batch;
pub mod benchmark;
pub mod neighbors;
pub mod solve;

pub use batch::{BatchEntry, BatchResult, QueryPair, parse_pairs, read_pairs, run_batch, solve_batch};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, sample_pairs};
pub use neighbors::{NeighborsResult, list_neighbors, neighbors_from_file};
pub use solve::{SolveConfig, SolveResult, solve_in, solve_ladder};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar shared by the multi-query commands
pub(crate) fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
