//! Core domain types for word ladders
//!
//! Pure value types and the distance function, with no I/O.

mod distance;
mod word;

pub use distance::{is_one_step, mismatch};
pub use word::{Word, WordError};
