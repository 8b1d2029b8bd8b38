//! Coach error handling.

use thiserror::Error;

/// Errors raised around the analysis engine.
///
/// The analyzers themselves are total; these describe inputs that the
/// surrounding layer refuses to pass to them.
#[derive(Error, Debug)]
pub enum CoachError {
    /// Prompt text was empty or only whitespace.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A repository was found but it has no commits to analyze.
    #[error("No commits found in recent history. Make a few commits and try again")]
    NoHistoryAvailable,

    /// Git operation failed on a repository that exists.
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// Failed to read a supplied log or diff-stat file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
