//! Interactive menu.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use tracing::debug;

use crate::cli::progress::render_status_line;
use crate::cli::{cheatsheet, lesson, pause, prompt, read_line, workflow, Session};
use crate::coach::CoachError;
use crate::data::export::{resolve_output, WORKFLOW_FILE};
use crate::data::progress::{Progress, FIRST_LESSON};
use crate::git::HistoryOptions;

/// Menu command options.
#[derive(Parser)]
pub struct MenuCommand {}

impl MenuCommand {
    /// Executes the menu command.
    pub fn execute(self, session: &Session) -> Result<()> {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        let mut input = stdin.lock();
        let mut out = io::stdout();

        Menu {
            session,
            clear_screen: interactive,
        }
        .run(&mut input, &mut out)
    }
}

/// A choice in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Introductory lesson.
    Lesson,
    /// Prompt analyzer.
    AnalyzePrompt,
    /// Cheat sheet export.
    CheatSheet,
    /// Commit history analysis.
    AnalyzeHistory,
    /// Guided mini project.
    Project,
    /// Leave the menu.
    Exit,
}

impl MenuChoice {
    /// Parses the number typed by the user.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Lesson),
            "2" => Some(Self::AnalyzePrompt),
            "3" => Some(Self::CheatSheet),
            "4" => Some(Self::AnalyzeHistory),
            "5" => Some(Self::Project),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Renders the menu with markers for what has been done.
pub fn render_menu(progress: &Progress) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Your Progress:".cyan().bold()));
    out.push_str(&format!("{}\n", render_status_line(progress)));
    out.push_str(&format!("\n{}\n\n", "What would you like to do?".bold()));

    let lesson_mark = if progress.has_completed(FIRST_LESSON) {
        format!("  {}", "✓ Completed".green())
    } else {
        String::new()
    };
    out.push_str(&format!("1. Interactive Lesson (Prompt Basics){lesson_mark}\n"));

    let analyzed = if progress.prompts_analyzed > 0 {
        format!("  {}", format!("✓ Used {}x", progress.prompts_analyzed).cyan())
    } else {
        format!("  {}", "⭐ Try This!".yellow())
    };
    out.push_str(&format!("2. Analyze Your Prompt (Live Feedback){analyzed}\n"));

    let cheat = if progress.cheatsheet_generated {
        format!("  {}", "✓ Generated".green())
    } else {
        String::new()
    };
    out.push_str(&format!("3. Generate Cheat Sheet{cheat}\n"));

    let git = if progress.git_analyzed {
        format!("  {}", "✓ Analyzed".green())
    } else {
        format!("  {}", "⭐ Powerful!".yellow())
    };
    out.push_str(&format!("4. Analyze Git Workflow (Personalized Tips){git}\n"));

    out.push_str("5. Build Mini Project (Guided)\n");
    out.push_str("6. Exit\n");
    out
}

fn render_welcome() -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", "👋 Welcome to prompt-coach!".cyan().bold()));
    out.push_str("This tool will help you master your AI coding assistant through:\n\n");
    out.push_str(&format!(
        "  {} Interactive lessons with before/after examples\n",
        "1.".green()
    ));
    out.push_str(&format!("  {} Live analysis of your prompts\n", "2.".green()));
    out.push_str(&format!(
        "  {} Personalized workflow suggestions from your git history\n",
        "3.".green()
    ));
    out.push_str(&format!("  {} Hands-on project building\n\n", "4.".green()));
    out.push_str(&format!("{}\n", "Ready to become a prompt expert?".yellow()));
    out
}

fn render_banner() -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n\n", "🤖 PROMPT COACH".cyan().bold()));
    out.push_str("Learn to write better AI coding prompts through guided practice.\n\n");
    for feature in [
        "Interactive Lessons",
        "Live Prompt Analysis",
        "Git Workflow Insights",
        "Personalized Cheat Sheets",
    ] {
        out.push_str(&format!("{}\n", format!("✔ {feature}").green()));
    }
    out
}

fn render_goodbye() -> String {
    format!(
        "\n{}\n\nKeep practicing and you'll be a pro in no time!\n\n{}\n",
        "🚀 Thanks for using prompt-coach!".cyan().bold(),
        "Your progress has been saved.".dark_grey()
    )
}

/// Menu loop over injected input and output.
pub struct Menu<'a> {
    /// Settings and progress storage.
    pub session: &'a Session,
    /// Clear the terminal between screens.
    pub clear_screen: bool,
}

impl Menu<'_> {
    /// Runs until the user exits or input closes.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let store = self.session.store();

        if !store.load()?.welcomed {
            self.clear(out)?;
            write!(out, "{}", render_welcome())?;
            if !pause(input, out, "\nPress Enter to begin...")? {
                return Ok(());
            }
            store.update(|p| p.welcomed = true)?;
        }

        self.clear(out)?;
        write!(out, "{}", render_banner())?;

        loop {
            write!(out, "{}", render_menu(&store.load()?))?;
            write!(out, "\n{} ", "Choose [1/2/3/4/5/6]:".cyan().bold())?;
            out.flush()?;

            let Some(line) = read_line(input)? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(out, "{}", "Please choose a number from 1 to 6.".red())?;
                continue;
            };
            debug!(?choice, "Menu selection");

            self.clear(out)?;
            match choice {
                MenuChoice::Lesson => lesson::run_lesson(store, input, out)?,
                MenuChoice::AnalyzePrompt => self.analyze_prompt(input, out)?,
                MenuChoice::CheatSheet => self.cheat_sheet(input, out)?,
                MenuChoice::AnalyzeHistory => self.analyze_history(input, out)?,
                MenuChoice::Project => lesson::run_project(input, out)?,
                MenuChoice::Exit => {
                    write!(out, "{}", render_goodbye())?;
                    return Ok(());
                }
            }
        }
    }

    fn clear<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.clear_screen {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn analyze_prompt<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        writeln!(out, "\n{}\n", "🔍 Live Prompt Analyzer".cyan().bold())?;
        writeln!(
            out,
            "I'll analyze your assistant prompt and suggest improvements.\n"
        )?;
        writeln!(out, "{}", "Try these example prompts:".dark_grey())?;
        for example in prompt::EXAMPLE_PROMPTS {
            writeln!(out, "  • '{example}'")?;
        }
        write!(out, "\n{} ", "Enter your prompt:".yellow().bold())?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        match prompt::analyze_and_record(&line, self.session.store()) {
            Ok((text, analysis, total)) => {
                write!(out, "{}", prompt::render_analysis(text, &analysis))?;
                writeln!(
                    out,
                    "{}\n",
                    format!("You've analyzed {total} prompt(s) so far").dark_grey()
                )?;
            }
            Err(e) if matches!(e.downcast_ref::<CoachError>(), Some(CoachError::InvalidInput(_))) => {
                writeln!(out, "\n{}", "Empty prompt! Try again.".red())?;
            }
            Err(e) => return Err(e),
        }

        pause(input, out, "Press Enter to continue...")?;
        Ok(())
    }

    fn cheat_sheet<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        let path = cheatsheet::export_cheat_sheet(self.session, None)?;
        write!(out, "{}", cheatsheet::render_cheat_sheet(&path))?;
        pause(input, out, "Press Enter to continue...")?;
        Ok(())
    }

    fn analyze_history<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "\nI'll analyze your recent commits and suggest personalized prompt workflows.\n"
        )?;

        let export = resolve_output(None, self.session.settings(), WORKFLOW_FILE);
        match workflow::run_workflow(self.session, &HistoryOptions::default(), Some(&export)) {
            Ok(outcome) => write!(out, "{}", workflow::render_outcome(&outcome))?,
            Err(e) if matches!(e.downcast_ref::<CoachError>(), Some(CoachError::NoHistoryAvailable)) => {
                writeln!(out, "{}", "⚠️  No commits found in recent history".yellow())?;
                writeln!(out, "Make a few commits and try again!\n")?;
            }
            Err(e) => writeln!(out, "{} {e:#}\n", "Error:".red())?,
        }

        pause(input, out, "Press Enter to continue...")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProgressStore;
    use crate::utils::Settings;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> Session {
        Session::new(
            Settings::default(),
            ProgressStore::new(dir.path().join("progress.json")),
        )
    }

    fn run(session: &Session, script: &str) -> String {
        let mut out = Vec::new();
        Menu {
            session,
            clear_screen: false,
        }
        .run(&mut Cursor::new(script.to_string()), &mut out)
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn choices_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Lesson));
        assert_eq!(MenuChoice::parse(" 4 \n"), Some(MenuChoice::AnalyzeHistory));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn menu_markers_follow_progress() {
        let fresh = render_menu(&Progress::default());
        assert!(fresh.contains("Try This!"));
        assert!(!fresh.contains("Completed"));

        let mut progress = Progress {
            prompts_analyzed: 2,
            cheatsheet_generated: true,
            ..Progress::default()
        };
        progress.complete_lesson(FIRST_LESSON);
        let text = render_menu(&progress);
        assert!(text.contains("✓ Completed"));
        assert!(text.contains("✓ Used 2x"));
        assert!(text.contains("✓ Generated"));
    }

    #[test]
    fn first_run_welcomes_then_exits() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);

        let text = run(&session, "\n6\n");
        assert!(text.contains("Welcome to prompt-coach"));
        assert!(text.contains("Thanks for using prompt-coach"));
        assert!(session.store().load().unwrap().welcomed);

        let again = run(&session, "6\n");
        assert!(!again.contains("Welcome to prompt-coach"));
    }

    #[test]
    fn invalid_choice_is_reported() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);

        let text = run(&session, "\nx\n6\n");
        assert!(text.contains("Please choose a number from 1 to 6."));
    }

    #[test]
    fn prompt_analysis_from_menu() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);

        let text = run(&session, "\n2\ncreate api\n\n2\n   \n\n6\n");
        assert!(text.contains("Clarity Score:"));
        assert!(text.contains("Empty prompt! Try again."));
        assert_eq!(session.store().load().unwrap().prompts_analyzed, 1);
    }

    #[test]
    fn closed_input_leaves_menu() {
        let dir = TempDir::new().unwrap();
        let session = session(&dir);

        let text = run(&session, "\n");
        assert!(!text.contains("Thanks for using prompt-coach"));
    }
}
