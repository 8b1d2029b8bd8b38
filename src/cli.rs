//! CLI interface for prompt-coach.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::data::ProgressStore;
use crate::utils::Settings;

pub mod cheatsheet;
pub mod help;
pub mod lesson;
pub mod menu;
pub mod progress;
pub mod prompt;
pub mod workflow;

/// prompt-coach: learn to write better prompts for AI coding assistants.
#[derive(Parser)]
#[command(name = "prompt-coach")]
#[command(
    about = "Interactive coach for writing better AI coding assistant prompts",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Progress file to use (overrides PROMPT_COACH_PROGRESS).
    #[arg(long, global = true, value_name = "PATH")]
    pub progress_file: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Scores a prompt and suggests an improved version.
    Prompt(prompt::PromptCommand),
    /// Classifies your commit history and recommends prompt workflows.
    Workflow(workflow::WorkflowCommand),
    /// Prints and exports the prompt cheat sheet.
    Cheatsheet(cheatsheet::CheatsheetCommand),
    /// Shows the introductory lesson.
    Lesson(lesson::LessonCommand),
    /// Walks through the guided mini project.
    Project(lesson::ProjectCommand),
    /// Shows or resets your progress.
    Progress(progress::ProgressCommand),
    /// Starts the interactive menu.
    Menu(menu::MenuCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        let session = || Session::load(self.progress_file.clone());

        match self.command {
            Commands::Prompt(cmd) => cmd.execute(&session()?),
            Commands::Workflow(cmd) => cmd.execute(&session()?),
            Commands::Cheatsheet(cmd) => cmd.execute(&session()?),
            Commands::Lesson(cmd) => cmd.execute(&session()?),
            Commands::Project(cmd) => cmd.execute(),
            Commands::Progress(cmd) => cmd.execute(&session()?),
            Commands::Menu(cmd) => cmd.execute(&session()?),
            Commands::HelpAll(help_cmd) => help_cmd.execute(),
        }
    }
}

/// Output format for commands that produce structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Settings and progress storage shared by the commands.
pub struct Session {
    settings: Settings,
    store: ProgressStore,
}

impl Session {
    /// Creates a session from explicit parts.
    pub fn new(settings: Settings, store: ProgressStore) -> Self {
        Self { settings, store }
    }

    /// Loads settings and locates the progress file.
    pub fn load(progress_file: Option<PathBuf>) -> Result<Self> {
        let settings = Settings::load().context("Failed to load settings")?;
        let store = match progress_file {
            Some(path) => ProgressStore::new(path),
            None => ProgressStore::from_settings(&settings)?,
        };
        tracing::debug!(progress = %store.path().display(), "Session ready");

        Ok(Self::new(settings, store))
    }

    /// Loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Progress storage.
    pub fn store(&self) -> &ProgressStore {
        &self.store
    }
}

/// Writes `message` and waits for a line of input.
///
/// Returns false when input is closed.
pub(crate) fn pause<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<bool> {
    write!(out, "{message}")?;
    out.flush()?;
    Ok(read_line(input)?.is_some())
}

/// Reads one line without its line ending; `None` at end of input.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_prompt_words() {
        let cli = Cli::try_parse_from(["prompt-coach", "prompt", "make", "a", "function"]).unwrap();
        match cli.command {
            Commands::Prompt(cmd) => {
                assert_eq!(cmd.text, vec!["make", "a", "function"]);
                assert_eq!(cmd.format, OutputFormat::Text);
            }
            _ => panic!("expected prompt command"),
        }
    }

    #[test]
    fn parse_prompt_yaml_format() {
        let cli =
            Cli::try_parse_from(["prompt-coach", "prompt", "--format", "yaml", "fix it"]).unwrap();
        match cli.command {
            Commands::Prompt(cmd) => assert_eq!(cmd.format, OutputFormat::Yaml),
            _ => panic!("expected prompt command"),
        }
    }

    #[test]
    fn parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["prompt-coach", "prompt", "--format", "xml", "x"]).is_err());
    }

    #[test]
    fn parse_workflow_defaults() {
        let cli = Cli::try_parse_from(["prompt-coach", "workflow"]).unwrap();
        match cli.command {
            Commands::Workflow(cmd) => {
                assert_eq!(cmd.count, crate::git::DEFAULT_COMMIT_COUNT);
                assert_eq!(cmd.base, crate::git::DEFAULT_DIFF_BASE);
                assert_eq!(cmd.repo, PathBuf::from("."));
                assert!(!cmd.no_export);
                assert!(cmd.log_file.is_none());
            }
            _ => panic!("expected workflow command"),
        }
    }

    #[test]
    fn parse_global_progress_file_after_subcommand() {
        let cli = Cli::try_parse_from([
            "prompt-coach",
            "progress",
            "--reset",
            "--progress-file",
            "/tmp/p.json",
        ])
        .unwrap();
        assert_eq!(cli.progress_file, Some(PathBuf::from("/tmp/p.json")));
        match cli.command {
            Commands::Progress(cmd) => assert!(cmd.reset),
            _ => panic!("expected progress command"),
        }
    }

    #[test]
    fn parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["prompt-coach"]).is_err());
    }

    #[test]
    fn read_line_strips_line_endings() {
        let mut input = Cursor::new("first\r\nsecond\n");
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("first"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("second"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn pause_reports_closed_input() {
        let mut out = Vec::new();
        assert!(pause(&mut Cursor::new("\n"), &mut out, "Press Enter...").unwrap());
        assert!(!pause(&mut Cursor::new(""), &mut out, "Press Enter...").unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "Press Enter...Press Enter...");
    }
}
