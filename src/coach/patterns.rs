//! Commit history pattern detection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coach::vocabulary::{
    contains_any, FALLBACK_LANGUAGE, FEATURE_KEYWORDS, FIX_KEYWORDS, LANGUAGE_RULES,
    REFACTOR_KEYWORDS, TEST_KEYWORDS,
};
use crate::coach::workflows::{PatternType, WorkflowSuggestion};

/// Number of changed files per file extension (without the leading dot).
pub type ExtensionCounts = BTreeMap<String, usize>;

const FIX_RATIO: f64 = 0.3;
const FEATURE_RATIO: f64 = 0.4;
const REFACTOR_RATIO: f64 = 0.2;
const TEST_RATIO: f64 = 0.2;

/// Profile of a developer derived from their commit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitProfile {
    /// Dominant working style.
    pub pattern_type: PatternType,
    /// Detected languages, primary first. Never empty.
    pub languages: Vec<String>,
    /// Recommended workflows for the pattern, in the primary language.
    pub workflows: [WorkflowSuggestion; 4],
    /// Keyword bucket counts behind the decision.
    pub counts: CommitCounts,
}

impl CommitProfile {
    /// Returns the language the workflows were written for.
    pub fn primary_language(&self) -> &str {
        self.languages
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_LANGUAGE)
    }
}

/// Commits matching each keyword bucket. A commit may count in several buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitCounts {
    /// Total number of commits analyzed.
    pub total: usize,
    /// Commits mentioning fixes or bugs.
    pub fixes: usize,
    /// Commits mentioning new features.
    pub features: usize,
    /// Commits mentioning refactoring.
    pub refactors: usize,
    /// Commits mentioning tests.
    pub tests: usize,
}

impl CommitCounts {
    /// Counts commits per keyword bucket.
    pub fn from_messages<S: AsRef<str>>(commits: &[S]) -> Self {
        let lowered: Vec<String> = commits.iter().map(|c| c.as_ref().to_lowercase()).collect();
        let count = |keywords: &[&str]| {
            lowered
                .iter()
                .filter(|msg| contains_any(msg, keywords))
                .count()
        };

        Self {
            total: commits.len(),
            fixes: count(&FIX_KEYWORDS),
            features: count(&FEATURE_KEYWORDS),
            refactors: count(&REFACTOR_KEYWORDS),
            tests: count(&TEST_KEYWORDS),
        }
    }

    /// Picks the pattern type; the first threshold exceeded wins.
    pub fn pattern_type(&self) -> PatternType {
        let total = self.total as f64;

        if self.fixes as f64 > total * FIX_RATIO {
            PatternType::BugHunter
        } else if self.features as f64 > total * FEATURE_RATIO {
            PatternType::FeatureBuilder
        } else if self.refactors as f64 > total * REFACTOR_RATIO {
            PatternType::CodeOptimizer
        } else if self.tests as f64 > total * TEST_RATIO {
            PatternType::TestEngineer
        } else {
            PatternType::FullStackDeveloper
        }
    }
}

/// Classifies commit history into a working-style profile.
pub struct CommitPatternClassifier;

impl CommitPatternClassifier {
    /// Classifies commit summaries and per-extension change counts.
    ///
    /// Callers are expected to pass at least one commit. An empty history
    /// still yields a profile but it carries no signal.
    pub fn classify<S: AsRef<str>>(
        commits: &[S],
        extension_counts: &ExtensionCounts,
    ) -> CommitProfile {
        let counts = CommitCounts::from_messages(commits);
        let languages = Self::detect_languages(commits, extension_counts);
        let pattern_type = counts.pattern_type();
        let workflows = pattern_type.workflows(&languages[0]);

        CommitProfile {
            pattern_type,
            languages,
            workflows,
            counts,
        }
    }

    /// Detects languages from file extensions and commit text.
    ///
    /// Output follows the rule order and falls back to a single default.
    pub fn detect_languages<S: AsRef<str>>(
        commits: &[S],
        extension_counts: &ExtensionCounts,
    ) -> Vec<String> {
        let commit_text = commits
            .iter()
            .map(|c| c.as_ref())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let mut languages: Vec<String> = LANGUAGE_RULES
            .iter()
            .filter(|rule| {
                rule.extensions
                    .iter()
                    .any(|ext| extension_counts.get(*ext).copied().unwrap_or(0) > 0)
                    || commit_text.contains(&rule.keyword())
            })
            .map(|rule| rule.name.to_string())
            .collect();

        if languages.is_empty() {
            languages.push(FALLBACK_LANGUAGE.to_string());
        }

        languages
    }
}
