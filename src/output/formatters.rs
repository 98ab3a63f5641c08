//! Formatting utilities for terminal output

use crate::core::Word;
use colored::Colorize;

/// Index of the first character that differs between two words
#[must_use]
pub fn changed_position(from: &Word, to: &Word) -> Option<usize> {
    from.chars().zip(to.chars()).position(|(a, b)| a != b)
}

/// Render `to` with the letters that differ from `from` highlighted
#[must_use]
pub fn highlight_step(from: &Word, to: &Word) -> String {
    from.chars()
        .zip(to.chars())
        .map(|(a, b)| {
            let letter = b.to_string();
            if a == b {
                letter.normal().to_string()
            } else {
                letter.bright_green().bold().underline().to_string()
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
