//! Word Ladder Solver - CLI
//!
//! Shortest single-letter transformation paths between dictionary words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, neighbors_from_file, read_pairs, run_batch,
        run_benchmark, solve_ladder,
    },
    output::{
        print_batch_result, print_benchmark_result, print_neighbors_result, print_solve_result,
    },
    wordlists::{CaseMode, WordSet, loader::parse_word_length},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find the shortest word ladder between two words using A* search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line
    #[arg(
        short,
        long,
        global = true,
        default_value = "/usr/share/dict/words"
    )]
    dictionary: PathBuf,

    /// Match dictionary words case-sensitively (default: lowercase everything)
    #[arg(long, global = true)]
    case_sensitive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest ladder between two words
    Solve {
        /// Word to start from
        start: String,

        /// Word to reach
        end: String,

        /// Print search statistics and timing
        #[arg(short, long)]
        verbose: bool,
    },

    /// List dictionary words one letter away from a word
    Neighbors {
        /// Word to inspect
        word: String,
    },

    /// Solve every "start end" pair in a file
    Batch {
        /// File with one "start end" pair per line
        pairs: PathBuf,

        /// Print a timing line for every query
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the solver on random pairs
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word length to sample from
        #[arg(short, long, default_value = "4", value_parser = parse_word_length)]
        length: usize,

        /// Seed for reproducible pair selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Cli {
    const fn case_mode(&self) -> CaseMode {
        if self.case_sensitive {
            CaseMode::Sensitive
        } else {
            CaseMode::Insensitive
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let case = cli.case_mode();

    match cli.command {
        Commands::Solve {
            start,
            end,
            verbose,
        } => run_solve_command(&cli.dictionary, start, end, case, verbose),
        Commands::Neighbors { word } => run_neighbors_command(&cli.dictionary, &word, case),
        Commands::Batch { pairs, verbose } => {
            run_batch_command(&cli.dictionary, &pairs, case, verbose)
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => run_benchmark_command(&cli.dictionary, count, length, seed, case),
    }
}

fn run_solve_command(
    dictionary: &Path,
    start: String,
    end: String,
    case: CaseMode,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig {
        case,
        verbose,
        ..SolveConfig::new(dictionary, start, end)
    };
    let result = solve_ladder(&config)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_neighbors_command(dictionary: &Path, word: &str, case: CaseMode) -> Result<()> {
    let result = neighbors_from_file(dictionary, word, case)?;

    print_neighbors_result(&result);
    Ok(())
}

fn run_batch_command(dictionary: &Path, pairs: &Path, case: CaseMode, verbose: bool) -> Result<()> {
    let pairs = read_pairs(pairs)
        .with_context(|| format!("Failed to read pairs from {}", pairs.display()))?;

    println!("🎯 Solving {} ladders...", pairs.len());
    let result = run_batch(dictionary, &pairs, case, verbose)?;

    print_batch_result(&result);
    Ok(())
}

fn run_benchmark_command(
    dictionary: &Path,
    count: usize,
    length: usize,
    seed: Option<u64>,
    case: CaseMode,
) -> Result<()> {
    let words = WordSet::from_file(dictionary, length, case)?;

    if let Some(seed) = seed {
        println!("Running benchmark on {count} random pairs of {length}-letter words (seed {seed})...");
    } else {
        println!("Running benchmark on {count} random pairs of {length}-letter words...");
    }

    let result = run_benchmark(&words, &BenchmarkConfig { count, seed })?;
    print_benchmark_result(&result);
    Ok(())
}
