//! Git history access for commit pattern analysis.

pub mod diffstat;
pub mod history;
pub mod repository;

pub use diffstat::{extension_of, parse_diff_stat, parse_oneline_log};
pub use history::{load_history, CommitHistory, HistoryOptions, HistorySource};
pub use repository::GitRepository;

/// Number of recent commits analyzed by default.
pub const DEFAULT_COMMIT_COUNT: usize = 30;

/// Revision the working changes are compared against by default.
pub const DEFAULT_DIFF_BASE: &str = "HEAD~10";
