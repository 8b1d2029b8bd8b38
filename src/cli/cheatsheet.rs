//! Cheat sheet command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;

use crate::cli::Session;
use crate::data::export::{resolve_output, write_document, CHEAT_SHEET, CHEAT_SHEET_FILE};

/// Cheat sheet command options.
#[derive(Parser)]
pub struct CheatsheetCommand {
    /// Where to write the cheat sheet.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CheatsheetCommand {
    /// Executes the cheat sheet command.
    pub fn execute(self, session: &Session) -> Result<()> {
        let path = export_cheat_sheet(session, self.output.as_deref())?;
        print!("{}", render_cheat_sheet(&path));
        Ok(())
    }
}

/// Writes the cheat sheet and marks it generated; returns the absolute path.
pub fn export_cheat_sheet(session: &Session, output: Option<&Path>) -> Result<PathBuf> {
    let target = resolve_output(output, session.settings(), CHEAT_SHEET_FILE);
    let written = write_document(&target, CHEAT_SHEET)?;
    session.store().update(|p| p.cheatsheet_generated = true)?;
    Ok(written)
}

/// Renders the cheat sheet followed by where it was saved.
pub fn render_cheat_sheet(saved_to: &Path) -> String {
    format!(
        "{}\n\n{}\n{} {}\n\n",
        "🎯 Prompt Cheat Sheet".magenta().bold(),
        CHEAT_SHEET,
        "✓ Cheat sheet saved to:".green(),
        saved_to.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ProgressStore;
    use crate::utils::Settings;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn export_writes_file_and_records_progress() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(
            Settings::default(),
            ProgressStore::new(dir.path().join("progress.json")),
        );
        let target = dir.path().join("tips.md");

        let written = export_cheat_sheet(&session, Some(&target)).unwrap();
        assert_eq!(fs::read_to_string(&written).unwrap(), CHEAT_SHEET);
        assert!(session.store().load().unwrap().cheatsheet_generated);

        let text = render_cheat_sheet(&written);
        assert!(text.contains("## Pro Tips"));
        assert!(text.contains(&written.display().to_string()));
    }
}
