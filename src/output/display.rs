//! Display functions for command results

use super::formatters::{changed_position, create_progress_bar, highlight_step};
use crate::commands::{BatchResult, BenchmarkResult, NeighborsResult, SolveResult};
use crate::solver::Ladder;
use colored::Colorize;

fn print_ladder(ladder: &Ladder) {
    let words = ladder.words();
    for (i, word) in words.iter().enumerate() {
        let rendered = if i == 0 {
            word.text().bright_yellow().bold().to_string()
        } else {
            highlight_step(&words[i - 1], word)
        };
        println!("  {:>3}. {rendered}", i + 1);
    }
}

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.bright_yellow().bold(),
        result.end.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.ladder {
        Some(ladder) => {
            println!();
            print_ladder(ladder);
            println!();
            println!(
                "{}",
                format!(
                    "✅ Found a ladder of {} words ({} steps)",
                    ladder.len(),
                    ladder.steps()
                )
                .green()
                .bold()
            );
        }
        None => {
            println!();
            println!(
                "{}",
                format!("❌ No ladder connects {} and {}", result.start, result.end)
                    .red()
                    .bold()
            );
        }
    }

    if verbose {
        let stats = &result.stats;
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Candidate words:  {}", result.candidates);
        println!("   Expanded:         {}", stats.expanded);
        println!("   Discovered:       {}", stats.discovered);
        println!("   Peak frontier:    {}", stats.peak_frontier);
        println!(
            "   Time taken:       {:.3} ms",
            stats.elapsed.as_secs_f64() * 1000.0
        );
    }
}

/// Print the one-step neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    let membership = if result.in_dictionary {
        "in dictionary".green()
    } else {
        "not in dictionary".yellow()
    };
    println!(
        "\n{} ({membership}): {} neighbor(s)",
        result.word.text().bright_yellow().bold(),
        result.neighbors.len()
    );

    for neighbor in &result.neighbors {
        let step = highlight_step(&result.word, neighbor);
        match changed_position(&result.word, neighbor) {
            Some(pos) => println!("   {step}  {}", format!("(letter {})", pos + 1).dimmed()),
            None => println!("   {step}"),
        }
    }
}

/// Print the result of a batch run
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for entry in &result.entries {
        let label = format!(
            "{:>4}: {} → {}",
            entry.pair.line, entry.pair.start, entry.pair.end
        );
        match &entry.outcome {
            Ok(outcome) => match outcome.ladder() {
                Some(ladder) => println!("{label}  {}", ladder.to_string().green()),
                None => println!("{label}  {}", "no ladder".yellow()),
            },
            Err(err) => println!("{label}  {}", err.to_string().red()),
        }
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Queries:      {}", result.entries.len());
    println!("   Solved:       {}", result.solved.to_string().green());
    println!("   No ladder:    {}", result.unsolvable.to_string().yellow());
    println!("   Failed:       {}", result.failed.to_string().red());
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Word length:      {} ({} candidate words)",
        result.word_length, result.candidates
    );
    println!("   Queries:          {}", result.total_queries);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   No ladder:        {}",
        format!("{}", result.unsolvable).yellow()
    );
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_length)
            .bright_yellow()
            .bold()
    );
    println!("   Words expanded:   {}", result.total_expanded);
    println!(
        "   Slowest query:    {:.3} ms",
        result.slowest.as_secs_f64() * 1000.0
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if let Some(longest) = &result.longest {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {longest}");
    }

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution (words per ladder):".bright_cyan().bold());
        for (&length, &count) in &result.distribution {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {length:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
