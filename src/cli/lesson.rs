//! Lesson and guided project commands.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;

use crate::cli::{pause, Session};
use crate::data::progress::FIRST_LESSON;
use crate::data::ProgressStore;

/// Badge shown the first time the lesson is completed.
pub const BADGE: &str = r"
    ╔═══════════════════════════╗
    ║   🏆 LESSON COMPLETE 🏆   ║
    ║                           ║
    ║    You're a Prompt Pro!   ║
    ╚═══════════════════════════╝
";

/// Lesson command options.
#[derive(Parser)]
pub struct LessonCommand {}

impl LessonCommand {
    /// Executes the lesson command.
    pub fn execute(self, session: &Session) -> Result<()> {
        print!("{}", lesson_intro());
        print!("{}", lesson_principles());
        println!("{}", complete_lesson(session.store())?);
        Ok(())
    }
}

/// Project command options.
#[derive(Parser)]
pub struct ProjectCommand {}

impl ProjectCommand {
    /// Executes the project command.
    pub fn execute(self) -> Result<()> {
        print!("{}", project_intro());
        for step in &PROJECT_STEPS {
            print!("{}", render_step(step));
            println!("{}", step.encouragement.cyan().bold());
            println!();
        }
        print!("{}", project_outro());
        Ok(())
    }
}

/// Bad prompt versus good prompt.
pub fn lesson_intro() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n\n",
        "📚 Lesson 1: Your First Assistant Prompt".green().bold()
    ));
    out.push_str(&format!("{}\n", "❌ Bad Prompt:".red().bold()));
    out.push_str("  'make function'\n");
    out.push_str(&format!(
        "  {}\n\n",
        "→ Too vague. Your assistant won't know what you want.".red()
    ));
    out.push_str(&format!("{}\n", "✅ Good Prompt:".green().bold()));
    out.push_str(&format!(
        "  {}\n",
        "'Create a Python function that reverses a string'".green()
    ));
    out.push_str(&format!(
        "  {}\n\n",
        "→ Clear language, clear task, clear output.".green()
    ));
    out.push_str(&format!("{}\n\n", "=".repeat(60)));
    out.push_str(&format!("{}\n", "Now try the good prompt yourself:".yellow()));
    out.push_str("Open your AI coding assistant and ask it to generate:\n");
    out.push_str(&format!(
        "{}\n\n",
        "'Create a Python function that reverses a string'".italic()
    ));
    out
}

/// Principles shown after the learner has tried the good prompt.
pub fn lesson_principles() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{} You just used your assistant effectively.\n\n",
        "Nice!".green()
    ));
    out.push_str(&format!("{}\n", "Key Principles:".bold()));
    out.push_str("  • Be specific about the task\n");
    out.push_str("  • Mention the programming language\n");
    out.push_str("  • Describe input and output\n\n");
    out
}

/// Records the lesson and returns the message to show.
pub fn complete_lesson(store: &ProgressStore) -> Result<String> {
    let mut newly_completed = false;
    store.update(|p| newly_completed = p.complete_lesson(FIRST_LESSON))?;

    Ok(if newly_completed {
        format!("{}", BADGE.yellow().bold())
    } else {
        format!("{}", "✓ You've already completed this lesson!".cyan().bold())
    })
}

/// One step of the guided mini project.
#[derive(Debug, Clone, Copy)]
pub struct ProjectStep {
    /// Step heading.
    pub title: &'static str,
    /// Prompt to give the assistant.
    pub prompt: &'static str,
    /// What the learner is waiting to do before continuing.
    pub wait: &'static str,
    /// Shown once the step is done.
    pub encouragement: &'static str,
}

/// The three steps of the mini project.
pub const PROJECT_STEPS: [ProjectStep; 3] = [
    ProjectStep {
        title: "Step 1: Create Basic Structure",
        prompt: "Create a Python CLI todo app that lets users add and view tasks",
        wait: "Press Enter after trying this with your assistant...",
        encouragement: "Great start! Now let's add persistence.",
    },
    ProjectStep {
        title: "Step 2: Add File Storage",
        prompt: "Update the todo app so tasks are saved to a JSON file",
        wait: "Press Enter after implementing this...",
        encouragement: "Excellent! Let's add one more feature.",
    },
    ProjectStep {
        title: "Step 3: Add Task Completion",
        prompt: "Add ability to mark tasks as complete and show completion status",
        wait: "Press Enter after adding this feature...",
        encouragement: "🎉 You did it!",
    },
];

/// Project heading.
pub fn project_intro() -> String {
    format!(
        "\n{}\n\nYou'll use your assistant to build a real CLI app, step by step.\n\n",
        "🛠️  Mini Project: Build a Todo CLI with Your Assistant"
            .cyan()
            .bold()
    )
}

/// Renders one project step.
pub fn render_step(step: &ProjectStep) -> String {
    format!(
        "{}\nAsk your assistant:\n{}\n\n",
        step.title.bold(),
        format!("'{}'", step.prompt).green()
    )
}

/// Closing workflow advice.
pub fn project_outro() -> String {
    let mut out = String::new();
    out.push_str("You just built a real CLI tool with your assistant in 3 steps.\n\n");
    out.push_str(&format!("{}\n", "Professional Workflow Pattern:".magenta().bold()));
    out.push_str("  1. Start simple - get basic version working\n");
    out.push_str("  2. Iterate - add features one at a time\n");
    out.push_str("  3. Refine - ask your assistant to improve your code\n");
    out.push_str("  4. Test - verify each feature works\n\n");
    out.push_str(&format!(
        "{} Save your prompts! They become templates for future projects.\n\n",
        "💡 Pro Tip:".yellow()
    ));
    out
}

/// Runs the lesson interactively, pausing where the learner practices.
pub fn run_lesson<R: BufRead, W: Write>(
    store: &ProgressStore,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    write!(out, "{}", lesson_intro())?;
    if !pause(input, out, "Press Enter after you've tried it...")? {
        return Ok(());
    }
    write!(out, "{}", lesson_principles())?;
    writeln!(out, "{}", complete_lesson(store)?)?;
    pause(input, out, "\nPress Enter to return to menu...")?;
    Ok(())
}

/// Runs the project interactively, one step at a time.
pub fn run_project<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    write!(out, "{}", project_intro())?;
    for step in &PROJECT_STEPS {
        write!(out, "{}", render_step(step))?;
        if !pause(input, out, step.wait)? {
            return Ok(());
        }
        writeln!(out, "\n{}\n", step.encouragement.cyan().bold())?;
    }
    write!(out, "{}", project_outro())?;
    pause(input, out, "Press Enter to continue...")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> ProgressStore {
        ProgressStore::new(dir.path().join("progress.json"))
    }

    #[test]
    fn lesson_badge_only_first_time() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert!(complete_lesson(&store).unwrap().contains("LESSON COMPLETE"));
        assert!(complete_lesson(&store)
            .unwrap()
            .contains("already completed this lesson"));
        assert_eq!(store.load().unwrap().completed_lessons, vec![FIRST_LESSON]);
    }

    #[test]
    fn lesson_contrasts_prompts() {
        let intro = lesson_intro();
        assert!(intro.contains("'make function'"));
        assert!(intro.contains("Create a Python function that reverses a string"));
        assert!(lesson_principles().contains("Mention the programming language"));
    }

    #[test]
    fn interactive_lesson_records_completion() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let mut out = Vec::new();

        run_lesson(&store, &mut Cursor::new("\n\n"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Key Principles"));
        assert!(store.load().unwrap().has_completed(FIRST_LESSON));
    }

    #[test]
    fn interactive_lesson_stops_on_closed_input() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let mut out = Vec::new();

        run_lesson(&store, &mut Cursor::new(""), &mut out).unwrap();
        assert!(!store.load().unwrap().has_completed(FIRST_LESSON));
    }

    #[test]
    fn project_walks_through_all_steps() {
        let mut out = Vec::new();
        run_project(&mut Cursor::new("\n\n\n\n"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        for step in &PROJECT_STEPS {
            assert!(text.contains(step.title));
            assert!(text.contains(step.prompt));
        }
        assert!(text.contains("Professional Workflow Pattern"));
    }
}
