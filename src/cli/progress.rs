//! Progress command.

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;

use crate::cli::Session;
use crate::data::progress::{Progress, FIRST_LESSON};

/// Progress command options.
#[derive(Parser)]
pub struct ProgressCommand {
    /// Forget all progress.
    #[arg(long)]
    pub reset: bool,
}

impl ProgressCommand {
    /// Executes the progress command.
    pub fn execute(self, session: &Session) -> Result<()> {
        let store = session.store();
        if self.reset {
            store.reset()?;
            println!("Progress reset ({})", store.path().display());
            return Ok(());
        }

        let progress = store.load()?;
        print!("{}", render_summary(&progress));
        println!("{}", format!("Stored in {}", store.path().display()).dark_grey());
        Ok(())
    }
}

fn check(done: bool) -> &'static str {
    if done {
        "✓"
    } else {
        "✗"
    }
}

/// One-line progress summary shown above the menu.
pub fn render_status_line(progress: &Progress) -> String {
    format!(
        "  Lessons: {} | Prompts Analyzed: {} | Git Scan: {}",
        progress.completed_lessons.len(),
        progress.prompts_analyzed,
        check(progress.git_analyzed)
    )
}

/// Full progress summary.
pub fn render_summary(progress: &Progress) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Your Progress:".cyan().bold()));
    out.push_str(&format!("{}\n", render_status_line(progress)));
    out.push_str(&format!(
        "  First lesson: {} | Cheat sheet: {}\n",
        check(progress.has_completed(FIRST_LESSON)),
        check(progress.cheatsheet_generated)
    ));
    if let Some(updated_at) = progress.updated_at {
        out.push_str(&format!(
            "  Last activity: {}\n",
            updated_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn status_line_for_fresh_progress() {
        assert_eq!(
            render_status_line(&Progress::default()),
            "  Lessons: 0 | Prompts Analyzed: 0 | Git Scan: ✗"
        );
    }

    #[test]
    fn summary_shows_activity() {
        let progress = Progress {
            completed_lessons: vec![FIRST_LESSON.to_string()],
            prompts_analyzed: 4,
            git_analyzed: true,
            updated_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).single(),
            ..Progress::default()
        };
        let text = render_summary(&progress);
        assert!(text.contains("Lessons: 1 | Prompts Analyzed: 4 | Git Scan: ✓"));
        assert!(text.contains("First lesson: ✓ | Cheat sheet: ✗"));
        assert!(text.contains("Last activity: 2026-03-01 09:30 UTC"));
    }
}
