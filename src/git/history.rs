//! Loads the commit history handed to the pattern classifier.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::coach::{CoachError, ExtensionCounts};
use crate::git::diffstat::{parse_diff_stat, parse_oneline_log};
use crate::git::repository::GitRepository;
use crate::git::{DEFAULT_COMMIT_COUNT, DEFAULT_DIFF_BASE};

/// Commits used when no repository is available.
pub const DEMO_COMMITS: [&str; 3] = ["fix login bug", "add api endpoint", "refactor auth module"];

/// Extension counts used when no repository is available.
pub const DEMO_EXTENSION: (&str, usize) = ("py", 12);

/// Where a history came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistorySource {
    /// Read from a git repository.
    Repository,
    /// Parsed from saved `git log` / `git diff --stat` output.
    Files,
    /// Built-in example data.
    Demo,
}

/// Commit summaries plus changed-file extension counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitHistory {
    /// One-line summaries, newest first.
    pub commits: Vec<String>,
    /// Changed files per extension.
    pub extension_counts: ExtensionCounts,
    /// Origin of the data.
    pub source: HistorySource,
}

impl CommitHistory {
    /// The built-in example history.
    pub fn demo() -> Self {
        let (ext, count) = DEMO_EXTENSION;
        Self {
            commits: DEMO_COMMITS.iter().map(|c| (*c).to_string()).collect(),
            extension_counts: ExtensionCounts::from([(ext.to_string(), count)]),
            source: HistorySource::Demo,
        }
    }

    /// Whether the data is the built-in example.
    pub fn is_demo(&self) -> bool {
        self.source == HistorySource::Demo
    }
}

/// Where and how much history to load.
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// Directory to search for a repository.
    pub repo_path: PathBuf,
    /// Maximum number of commits.
    pub count: usize,
    /// Revision to diff HEAD against.
    pub base: String,
    /// Saved `git log --oneline` output used instead of the repository.
    pub log_file: Option<PathBuf>,
    /// Saved `git diff --stat` output used instead of the repository diff.
    pub diff_stat_file: Option<PathBuf>,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            count: DEFAULT_COMMIT_COUNT,
            base: DEFAULT_DIFF_BASE.to_string(),
            log_file: None,
            diff_stat_file: None,
        }
    }
}

/// Loads commit history according to `options`.
///
/// Without a repository the demo history is returned. A repository (or log
/// file) without any commits is an error.
pub fn load_history(options: &HistoryOptions) -> Result<CommitHistory> {
    if let Some(log_file) = &options.log_file {
        let mut commits = parse_oneline_log(&read_input(log_file)?);
        commits.truncate(options.count);
        if commits.is_empty() {
            return Err(CoachError::NoHistoryAvailable.into());
        }
        let extension_counts = match &options.diff_stat_file {
            Some(path) => parse_diff_stat(&read_input(path)?),
            None => ExtensionCounts::new(),
        };
        info!(commits = commits.len(), file = %log_file.display(), "Loaded history from file");
        return Ok(CommitHistory {
            commits,
            extension_counts,
            source: HistorySource::Files,
        });
    }

    let Some(repo) = GitRepository::discover(&options.repo_path)
        .map_err(CoachError::from)
        .context("Failed to open git repository")?
    else {
        info!(path = %options.repo_path.display(), "Not inside a git repository, using demo history");
        return Ok(CommitHistory::demo());
    };

    let commits = repo.recent_commit_summaries(options.count)?;
    if commits.is_empty() {
        return Err(CoachError::NoHistoryAvailable.into());
    }

    let extension_counts = match &options.diff_stat_file {
        Some(path) => parse_diff_stat(&read_input(path)?),
        None => repo.changed_extension_counts(&options.base)?,
    };

    debug!(
        workdir = ?repo.workdir(),
        commits = commits.len(),
        extensions = extension_counts.len(),
        "Loaded history from repository"
    );

    Ok(CommitHistory {
        commits,
        extension_counts,
        source: HistorySource::Repository,
    })
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(CoachError::from)
        .with_context(|| format!("Failed to read {}", path.display()))
}
