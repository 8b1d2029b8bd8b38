//! Markdown documents written for the learner.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::coach::CommitProfile;
use crate::utils::Settings;

/// Default file name of the cheat sheet.
pub const CHEAT_SHEET_FILE: &str = "PROMPT_TIPS.md";

/// Default file name of the personalized workflow document.
pub const WORKFLOW_FILE: &str = "MY_PROMPT_WORKFLOWS.md";

/// Prompt cheat sheet in Markdown.
pub const CHEAT_SHEET: &str = r#"# AI Prompt Cheat Sheet

## Code Generation
- "Create a [language] function that [specific task]"
- "Write a [language] class for [purpose] with [methods]"

## Debugging
- "Debug this error: [error message] in code: [paste code]"
- "Explain why this code fails: [paste code]"

## Refactoring
- "Refactor this code for readability: [paste code]"
- "Optimize this function for performance: [paste code]"

## Testing
- "Generate unit tests for this function: [paste function]"
- "Create test cases for edge cases in: [paste code]"

## Documentation
- "Add docstrings to this code: [paste code]"
- "Explain what this code does: [paste code]"

## Pro Tips
1. Always specify the programming language
2. Describe input and output clearly
3. Break complex tasks into smaller prompts
4. Ask for error handling and edge cases
5. Request explanations to learn while coding

---
Generated by prompt-coach
"#;

/// Renders the personalized workflow document for `profile`.
pub fn render_workflow_document(profile: &CommitProfile, commit_count: usize) -> String {
    let mut doc = String::new();

    doc.push_str("# My Personalized Prompt Workflows\n\n");
    doc.push_str(&format!(
        "**Generated by prompt-coach** based on {commit_count} commits\n\n"
    ));
    doc.push_str(&format!("**Your Profile:** {}\n\n", profile.pattern_type));
    doc.push_str(&format!(
        "**Your Languages:** {}\n\n",
        profile.languages.join(", ")
    ));
    doc.push_str("---\n\n");

    for (i, workflow) in profile.workflows.iter().enumerate() {
        doc.push_str(&format!("## {}. {}\n\n", i + 1, workflow.title));
        doc.push_str(&format!(
            "**Prompt Template:**\n```\n{}\n```\n\n",
            workflow.prompt_template
        ));
        doc.push_str(&format!("**When to Use:** {}\n\n", workflow.rationale));
        doc.push_str("---\n\n");
    }

    doc.push_str("## How to Use These Workflows\n\n");
    doc.push_str("1. Copy the prompt template\n");
    doc.push_str("2. Replace [bracketed parts] with your specific code/needs\n");
    doc.push_str("3. Run it with your AI coding assistant\n");
    doc.push_str("4. Iterate and refine as needed\n\n");
    doc.push_str("---\n");
    doc.push_str("*Generated by prompt-coach*\n");

    doc
}

/// Chooses where a document goes.
///
/// An explicit path wins, then the configured export directory, then the
/// current directory.
pub fn resolve_output(explicit: Option<&Path>, settings: &Settings, file_name: &str) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => settings
            .export_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(file_name),
    }
}

/// Writes `content` to `path`, replacing any existing file, and returns the
/// absolute path written.
pub fn write_document(path: &Path, content: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    let absolute = fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    info!(path = %absolute.display(), bytes = content.len(), "Exported document");
    Ok(absolute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coach::{CommitPatternClassifier, ExtensionCounts};
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn cheat_sheet_sections() {
        for section in [
            "## Code Generation",
            "## Debugging",
            "## Refactoring",
            "## Testing",
            "## Documentation",
            "## Pro Tips",
        ] {
            assert!(CHEAT_SHEET.contains(section), "missing {section}");
        }
    }

    #[test]
    fn workflow_document_lists_all_workflows() {
        let profile = CommitPatternClassifier::classify(
            &["refactor db layer", "clean up", "docs"],
            &ExtensionCounts::from([("rs".to_string(), 2)]),
        );
        let doc = render_workflow_document(&profile, 3);

        assert!(doc.starts_with("# My Personalized Prompt Workflows\n"));
        assert!(doc.contains("based on 3 commits"));
        assert!(doc.contains("**Your Profile:** ✨ Code Optimizer"));
        assert!(doc.contains("**Your Languages:** Rust"));
        for (i, workflow) in profile.workflows.iter().enumerate() {
            assert!(doc.contains(&format!("## {}. {}", i + 1, workflow.title)));
            assert!(doc.contains(&format!("```\n{}\n```", workflow.prompt_template)));
        }
        assert_eq!(doc.matches("**When to Use:**").count(), 4);
    }

    #[test]
    fn write_document_returns_absolute_path() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out").join(CHEAT_SHEET_FILE);

        let written = write_document(&target, CHEAT_SHEET).unwrap();
        assert!(written.is_absolute());
        assert_eq!(fs::read_to_string(&written).unwrap(), CHEAT_SHEET);

        // Overwrites.
        write_document(&target, "second").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn resolve_output_prefers_explicit_path() {
        let settings = Settings {
            env: HashMap::new(),
        };
        let explicit = Path::new("/tmp/custom.md");
        assert_eq!(
            resolve_output(Some(explicit), &settings, WORKFLOW_FILE),
            PathBuf::from("/tmp/custom.md")
        );
    }
}
