//! Workflow command: personalized prompt workflows from commit history.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use tracing::info;

use crate::cli::{OutputFormat, Session};
use crate::coach::{CommitPatternClassifier, CommitProfile};
use crate::data::export::{render_workflow_document, resolve_output, write_document, WORKFLOW_FILE};
use crate::data::WorkflowReport;
use crate::git::{load_history, CommitHistory, HistoryOptions, DEFAULT_COMMIT_COUNT, DEFAULT_DIFF_BASE};

/// Workflow command options.
#[derive(Parser)]
pub struct WorkflowCommand {
    /// Directory inside the repository to analyze.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Number of recent commits to analyze.
    #[arg(long, default_value_t = DEFAULT_COMMIT_COUNT)]
    pub count: usize,

    /// Revision HEAD is compared against for changed file types.
    #[arg(long, default_value = DEFAULT_DIFF_BASE)]
    pub base: String,

    /// Read commits from saved `git log --oneline` output instead.
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Read changed files from saved `git diff --stat` output instead.
    #[arg(long, value_name = "FILE")]
    pub diff_stat_file: Option<PathBuf>,

    /// Where to write the workflow document.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not write the workflow document.
    #[arg(long)]
    pub no_export: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Result of analyzing commit history.
#[derive(Debug)]
pub struct WorkflowOutcome {
    /// History that was classified.
    pub history: CommitHistory,
    /// Classification result.
    pub profile: CommitProfile,
    /// Absolute path of the exported document.
    pub exported_to: Option<PathBuf>,
}

impl WorkflowCommand {
    /// Executes the workflow command.
    pub fn execute(self, session: &Session) -> Result<()> {
        let options = HistoryOptions {
            repo_path: self.repo,
            count: self.count,
            base: self.base,
            log_file: self.log_file,
            diff_stat_file: self.diff_stat_file,
        };
        let export = if self.no_export {
            None
        } else {
            Some(resolve_output(
                self.output.as_deref(),
                session.settings(),
                WORKFLOW_FILE,
            ))
        };

        let outcome = run_workflow(session, &options, export.as_deref())?;

        match self.format {
            OutputFormat::Text => print!("{}", render_outcome(&outcome)),
            OutputFormat::Yaml | OutputFormat::Json => {
                let mut report = WorkflowReport::new(&outcome.history, outcome.profile);
                report.exported_to = outcome
                    .exported_to
                    .map(|p| p.display().to_string());
                if self.format == OutputFormat::Yaml {
                    print!("{}", report.to_yaml_output()?);
                } else {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&report)
                            .context("Failed to serialize report")?
                    );
                }
            }
        }

        Ok(())
    }
}

/// Loads history, classifies it, optionally exports the document and
/// records the analysis in the learner's progress.
pub fn run_workflow(
    session: &Session,
    options: &HistoryOptions,
    export: Option<&Path>,
) -> Result<WorkflowOutcome> {
    let history = load_history(options)?;
    let profile = CommitPatternClassifier::classify(&history.commits, &history.extension_counts);
    info!(
        pattern = profile.pattern_type.label(),
        commits = history.commits.len(),
        demo = history.is_demo(),
        "Classified commit history"
    );

    let exported_to = match export {
        Some(path) => {
            let document = render_workflow_document(&profile, history.commits.len());
            Some(write_document(path, &document)?)
        }
        None => None,
    };

    session.store().update(|p| p.git_analyzed = true)?;

    Ok(WorkflowOutcome {
        history,
        profile,
        exported_to,
    })
}

/// Renders the outcome for the terminal.
pub fn render_outcome(outcome: &WorkflowOutcome) -> String {
    let mut out = String::new();
    let profile = &outcome.profile;

    if outcome.history.is_demo() {
        out.push_str(&format!("{}\n", "⚠️ Not inside a git repo.".yellow()));
        out.push_str(&format!(
            "{}\n",
            "Tip: run this inside any project folder with commits.".dark_grey()
        ));
        out.push_str(&format!("{}\n\n", "Showing example analysis instead...".cyan()));
    }

    out.push_str(&format!("{}\n", "✅ Analysis Complete".green().bold()));
    out.push_str(&format!("{}\n\n", "=".repeat(60)));

    out.push_str(&format!("{}\n", "Your Coding Profile:".bold()));
    out.push_str(&format!(
        "  📝 Commits analyzed: {}\n",
        outcome.history.commits.len()
    ));
    out.push_str(&format!("  🎯 Primary pattern: {}\n", profile.pattern_type));
    out.push_str(&format!(
        "  💻 Main languages: {}\n\n",
        profile.languages.join(", ")
    ));

    out.push_str(&format!(
        "{}\n\n",
        "💡 Your Personalized Prompt Workflows:".magenta().bold()
    ));
    for (i, workflow) in profile.workflows.iter().enumerate() {
        out.push_str(&format!(
            "{}\n",
            format!("{}. {}", i + 1, workflow.title).cyan().bold()
        ));
        out.push_str(&format!(
            "   {} {}\n",
            "Prompt:".green(),
            workflow.prompt_template
        ));
        out.push_str(&format!("   {} {}\n\n", "Why:".yellow(), workflow.rationale));
    }

    if let Some(path) = &outcome.exported_to {
        out.push_str(&format!(
            "{} {}\n\n",
            "✓ Personalized workflows saved to:".green(),
            path.display()
        ));
    }

    out
}
