//! Learner progress persisted as JSON.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::Settings;

/// Identifier of the introductory lesson.
pub const FIRST_LESSON: &str = "lesson1";

const PROGRESS_FILE_NAME: &str = "progress.json";

/// What the learner has done so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    /// Identifiers of completed lessons, in completion order.
    pub completed_lessons: Vec<String>,
    /// Whether the cheat sheet has been exported.
    pub cheatsheet_generated: bool,
    /// Number of prompts analyzed.
    pub prompts_analyzed: u32,
    /// Whether commit history has been analyzed.
    pub git_analyzed: bool,
    /// Whether the first-run welcome was shown.
    pub welcomed: bool,
    /// Last time the file was saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Progress {
    /// Marks a lesson complete; returns false if it already was.
    pub fn complete_lesson(&mut self, lesson: &str) -> bool {
        if self.has_completed(lesson) {
            return false;
        }
        self.completed_lessons.push(lesson.to_string());
        true
    }

    /// Whether `lesson` is complete.
    pub fn has_completed(&self, lesson: &str) -> bool {
        self.completed_lessons.iter().any(|l| l == lesson)
    }

    /// Counts one more analyzed prompt and returns the new total.
    pub fn record_prompt_analyzed(&mut self) -> u32 {
        self.prompts_analyzed = self.prompts_analyzed.saturating_add(1);
        self.prompts_analyzed
    }
}

/// Reads and writes [`Progress`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Store backed by `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured location.
    ///
    /// `PROMPT_COACH_PROGRESS` (environment or settings) wins over the
    /// default `$HOME/.prompt-coach/progress.json`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let path = match settings.progress_path() {
            Some(path) => path,
            None => Settings::get_settings_dir()?.join(PROGRESS_FILE_NAME),
        };
        Ok(Self::new(path))
    }

    /// Path of the progress file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads progress; a missing file is fresh progress.
    pub fn load(&self) -> Result<Progress> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No progress file, starting fresh");
            return Ok(Progress::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read progress file: {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse progress file: {}", self.path.display()))
    }

    /// Saves progress, replacing the whole file.
    pub fn save(&self, progress: &mut Progress) -> Result<()> {
        progress.updated_at = Some(Utc::now());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json =
            serde_json::to_string_pretty(progress).context("Failed to serialize progress")?;
        let tmp = self.path.with_extension("json.tmp");
        {
            let mut file = File::create(&tmp)
                .with_context(|| format!("Failed to create progress file: {}", tmp.display()))?;
            file.write_all(json.as_bytes())
                .and_then(|()| file.sync_all())
                .with_context(|| format!("Failed to write progress file: {}", tmp.display()))?;
        }
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace progress file: {}", self.path.display()))?;

        debug!(path = %self.path.display(), "Saved progress");
        Ok(())
    }

    /// Loads, applies `f`, saves, and returns the saved progress.
    pub fn update<F>(&self, f: F) -> Result<Progress>
    where
        F: FnOnce(&mut Progress),
    {
        let mut progress = self.load()?;
        f(&mut progress);
        self.save(&mut progress)?;
        Ok(progress)
    }

    /// Deletes the progress file if present.
    pub fn reset(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove progress file: {}", self.path.display()))?;
        }
        Ok(())
    }
}
