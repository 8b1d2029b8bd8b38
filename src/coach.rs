//! Heuristic analysis engine for prompts and commit history.
//!
//! Both analyzers are pure functions over their inputs: they keep no state,
//! perform no I/O and return a fresh result on every call.

pub mod error;
pub mod patterns;
pub mod prompt;
pub mod vocabulary;
pub mod workflows;

pub use error::CoachError;
pub use patterns::{CommitCounts, CommitPatternClassifier, CommitProfile, ExtensionCounts};
pub use prompt::{PromptAnalysis, PromptIntent, PromptQualityAnalyzer};
pub use workflows::{PatternType, WorkflowSuggestion};
