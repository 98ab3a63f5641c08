//! Word Ladder Solver
//!
//! Finds the shortest chain of single-letter substitutions between two words
//! of equal length, where every intermediate word is in a dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::solver::search;
//! use word_ladder::wordlists::{CaseMode, WordSet};
//!
//! let words = WordSet::from_lines(
//!     ["flux", "flex", "flem", "alem", "gold"],
//!     4,
//!     CaseMode::Insensitive,
//! );
//!
//! let ladder = search(&words, "flux", "alem").unwrap().expect("ladder exists");
//! assert_eq!(ladder.texts(), vec!["flux", "flex", "flem", "alem"]);
//! ```

// Core domain types
pub mod core;

// Failure kinds
pub mod error;

// Word lists
pub mod wordlists;

// Search algorithm
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
