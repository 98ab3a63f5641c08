//! Typed failures for word list loading and search setup
//!
//! Every variant is raised before a search starts. Failing to find a ladder
//! is a normal outcome and is reported through
//! [`crate::solver::SearchOutcome::NoPath`], never through this type.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// Word list (or pairs file) is missing, not a regular file, or unreadable
    NotFound { path: PathBuf, reason: String },
    /// Start/end word or a length value is unusable
    InvalidArgument(String),
    /// Words (or a word set) of differing lengths were combined
    LengthMismatch { expected: usize, found: usize },
}

impl LadderError {
    pub(crate) fn not_found(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self::NotFound {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path, reason } => {
                write!(f, "Word list could not be found: {} ({reason})", path.display())
            }
            Self::InvalidArgument(message) => write!(f, "Invalid argument: {message}"),
            Self::LengthMismatch { expected, found } => write!(
                f,
                "Both words must be of equal length: expected {expected} characters, got {found}"
            ),
        }
    }
}

impl std::error::Error for LadderError {}
