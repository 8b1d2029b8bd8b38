//! Prompt command: scores a prompt and shows an improved version.

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::{Color, Stylize};

use crate::cli::{OutputFormat, Session};
use crate::coach::{PromptAnalysis, PromptQualityAnalyzer};
use crate::data::{PromptReport, ProgressStore};
use crate::utils::{join_words, validate_prompt};

/// Example prompts offered to new users.
pub const EXAMPLE_PROMPTS: [&str; 3] = ["make function", "create api", "fix the bug"];

/// Prompt command options.
#[derive(Parser)]
pub struct PromptCommand {
    /// Prompt to analyze; read from stdin when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl PromptCommand {
    /// Executes the prompt command.
    pub fn execute(self, session: &Session) -> Result<()> {
        let input = if self.text.is_empty() {
            read_stdin()?
        } else {
            join_words(&self.text)
        };

        let (prompt, analysis, total) = analyze_and_record(&input, session.store())?;

        match self.format {
            OutputFormat::Text => {
                print!("{}", render_analysis(prompt, &analysis));
                println!(
                    "{}",
                    format!("You've analyzed {total} prompt(s) so far").dark_grey()
                );
            }
            OutputFormat::Yaml => {
                print!("{}", PromptReport::new(prompt, analysis).to_yaml_output()?);
            }
            OutputFormat::Json => {
                let report = PromptReport::new(prompt, analysis);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("Failed to serialize report")?
                );
            }
        }

        Ok(())
    }
}

fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter your prompt, then press Ctrl+D:");
    }
    let mut input = String::new();
    stdin
        .read_to_string(&mut input)
        .context("Failed to read prompt from stdin")?;
    Ok(input)
}

/// Validates and analyzes `input`, counting it in the learner's progress.
///
/// Returns the trimmed prompt, its analysis and the new analyzed total.
pub fn analyze_and_record<'a>(
    input: &'a str,
    store: &ProgressStore,
) -> Result<(&'a str, PromptAnalysis, u32)> {
    let prompt = validate_prompt(input)?;
    let analysis = PromptQualityAnalyzer::analyze(prompt);
    tracing::debug!(score = analysis.score, intent = ?analysis.intent, "Analyzed prompt");

    let progress = store.update(|p| {
        p.record_prompt_analyzed();
    })?;

    Ok((prompt, analysis, progress.prompts_analyzed))
}

/// Verdict shown under the clarity score.
pub fn rating(score: u8) -> &'static str {
    match score {
        8.. => "Excellent prompt! ✨",
        6..=7 => "Good, but could be better 📈",
        _ => "Needs improvement 🔧",
    }
}

/// Colour of the clarity score.
pub fn score_color(score: u8) -> Color {
    match score {
        7.. => Color::Green,
        4..=6 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Renders an analysis for the terminal.
pub fn render_analysis(prompt: &str, analysis: &PromptAnalysis) -> String {
    let mut out = String::new();
    let color = score_color(analysis.score);

    out.push_str(&format!("\n{}\n\n", "=".repeat(60)));
    out.push_str(&format!(
        "{} {}\n",
        "Clarity Score:".bold(),
        format!("{}/10", analysis.score).with(color)
    ));
    out.push_str(&format!("{}\n\n", rating(analysis.score).with(color)));

    out.push_str(&format!("{}\n", "Your Prompt:".yellow()));
    out.push_str(&format!("  '{prompt}'\n\n"));

    if !analysis.issues.is_empty() {
        out.push_str(&format!("{}\n", "⚠️  Issues Found:".red().bold()));
        for issue in &analysis.issues {
            out.push_str(&format!("  ❌ {issue}\n"));
        }
        out.push('\n');
    }

    if !analysis.improvements.is_empty() {
        out.push_str(&format!("{}\n", "💡 How to Improve:".cyan().bold()));
        for improvement in &analysis.improvements {
            out.push_str(&format!("  → {improvement}\n"));
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\n", "✅ Improved Version:".green().bold()));
    out.push_str(&format!("  '{}'\n\n", analysis.improved_prompt));

    out.push_str(&format!("{}\n", "Why This Works Better:".magenta().bold()));
    for reason in &analysis.reasons {
        out.push_str(&format!("  ✓ {reason}\n"));
    }
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::CoachError;
    use tempfile::TempDir;

    #[test]
    fn rating_bands() {
        assert_eq!(rating(10), "Excellent prompt! ✨");
        assert_eq!(rating(8), "Excellent prompt! ✨");
        assert_eq!(rating(7), "Good, but could be better 📈");
        assert_eq!(rating(6), "Good, but could be better 📈");
        assert_eq!(rating(5), "Needs improvement 🔧");
        assert_eq!(rating(0), "Needs improvement 🔧");
    }

    #[test]
    fn score_colors() {
        assert_eq!(score_color(7), Color::Green);
        assert_eq!(score_color(6), Color::Yellow);
        assert_eq!(score_color(4), Color::Yellow);
        assert_eq!(score_color(3), Color::Red);
    }

    #[test]
    fn render_lists_every_section() {
        let analysis = PromptQualityAnalyzer::analyze("make function");
        let text = render_analysis("make function", &analysis);

        assert!(text.contains("'make function'"));
        for issue in &analysis.issues {
            assert!(text.contains(issue.as_str()));
        }
        for improvement in &analysis.improvements {
            assert!(text.contains(improvement.as_str()));
        }
        assert!(text.contains(&analysis.improved_prompt));
        assert!(text.contains("Adds clear language target (Python)"));
    }

    #[test]
    fn render_omits_empty_sections() {
        let prompt = "Create a Python function called reverse_string that takes a string";
        let analysis = PromptQualityAnalyzer::analyze(prompt);
        assert!(analysis.issues.is_empty());
        let text = render_analysis(prompt, &analysis);
        assert!(!text.contains("Issues Found"));
    }

    #[test]
    fn analyze_and_record_counts_prompts() {
        let dir = TempDir::new().unwrap();
        let store = ProgressStore::new(dir.path().join("progress.json"));

        let (prompt, _, total) = analyze_and_record("  create api \n", &store).unwrap();
        assert_eq!(prompt, "create api");
        assert_eq!(total, 1);

        let (_, _, total) = analyze_and_record("fix the bug", &store).unwrap();
        assert_eq!(total, 2);
    }

    #[test]
    fn analyze_and_record_rejects_blank_prompt() {
        let dir = TempDir::new().unwrap();
        let store = ProgressStore::new(dir.path().join("progress.json"));

        let err = analyze_and_record("   ", &store).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoachError>(),
            Some(CoachError::InvalidInput(_))
        ));
        assert!(!store.path().exists());
    }
}
