//! Report views, progress persistence and document export.

use serde::Serialize;

use crate::coach::{CommitProfile, PromptAnalysis};
use crate::git::{CommitHistory, HistorySource};

pub mod export;
pub mod progress;
pub mod yaml;

pub use export::{render_workflow_document, write_document, CHEAT_SHEET};
pub use progress::{Progress, ProgressStore};
pub use yaml::*;

/// Version information included in YAML output.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    /// Version of the prompt-coach tool.
    pub prompt_coach: String,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            prompt_coach: crate::VERSION.to_string(),
        }
    }
}

/// Output of the `prompt` command.
#[derive(Debug, Clone, Serialize)]
pub struct PromptReport {
    /// Tool version.
    pub versions: VersionInfo,
    /// The prompt as given.
    pub prompt: String,
    /// Analysis result.
    pub analysis: PromptAnalysis,
}

impl PromptReport {
    /// Wraps an analysis of `prompt`.
    pub fn new(prompt: &str, analysis: PromptAnalysis) -> Self {
        Self {
            versions: VersionInfo::default(),
            prompt: prompt.to_string(),
            analysis,
        }
    }

    /// Serializes the report to YAML.
    pub fn to_yaml_output(&self) -> anyhow::Result<String> {
        yaml::to_yaml(self)
    }
}

/// Output of the `workflow` command.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowReport {
    /// Tool version.
    pub versions: VersionInfo,
    /// Where the commits came from.
    pub source: HistorySource,
    /// Number of commits classified.
    pub commits_analyzed: usize,
    /// Changed files per extension.
    pub extension_counts: crate::coach::ExtensionCounts,
    /// Classification result.
    pub profile: CommitProfile,
    /// Path of the exported document, when one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_to: Option<String>,
}

impl WorkflowReport {
    /// Builds a report from the loaded history and its profile.
    pub fn new(history: &CommitHistory, profile: CommitProfile) -> Self {
        Self {
            versions: VersionInfo::default(),
            source: history.source,
            commits_analyzed: history.commits.len(),
            extension_counts: history.extension_counts.clone(),
            profile,
            exported_to: None,
        }
    }

    /// Serializes the report to YAML.
    pub fn to_yaml_output(&self) -> anyhow::Result<String> {
        yaml::to_yaml(self)
    }
}
