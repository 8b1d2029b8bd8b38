//! Parsers for `git log --oneline` and `git diff --stat` text.
//!
//! These let the workflow analysis run on saved command output instead of a
//! live repository.

use crate::coach::ExtensionCounts;

/// Shortest abbreviated hash `git log --oneline` prints by default.
const MIN_ABBREV_LEN: usize = 7;

/// Longest hash (full SHA-1).
const MAX_HASH_LEN: usize = 40;

/// Extracts commit summaries from `git log --oneline` output.
///
/// Blank lines are skipped and a leading abbreviated hash is removed.
pub fn parse_oneline_log(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_hash(line).to_string())
        .collect()
}

fn strip_hash(line: &str) -> &str {
    match line.split_once(char::is_whitespace) {
        Some((first, rest)) if is_abbrev_hash(first) && !rest.trim().is_empty() => rest.trim_start(),
        _ => line,
    }
}

fn is_abbrev_hash(token: &str) -> bool {
    (MIN_ABBREV_LEN..=MAX_HASH_LEN).contains(&token.len())
        && token.chars().all(|c| c.is_ascii_hexdigit())
}

/// Counts changed files per extension from `git diff --stat` output.
///
/// Only lines containing `|` describe a file; the summary line is ignored.
pub fn parse_diff_stat(text: &str) -> ExtensionCounts {
    let mut counts = ExtensionCounts::new();

    for line in text.lines() {
        let Some((path, _)) = line.split_once('|') else {
            continue;
        };
        if let Some(ext) = extension_of(path.trim()) {
            *counts.entry(ext.to_string()).or_insert(0) += 1;
        }
    }

    counts
}

/// Returns the text after the last `.` of the file name in `path`.
///
/// Rename notation such as `src/{old.rs => new.rs}` yields the new extension.
pub fn extension_of(path: &str) -> Option<&str> {
    let path = path.trim_end_matches('}');
    let (_, ext) = path.rsplit_once('.')?;
    if ext.is_empty() || ext.contains('/') || ext.contains(char::is_whitespace) {
        return None;
    }
    Some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── oneline log ───────────────────────────────────────────────

    #[test]
    fn oneline_strips_hashes() {
        let log = "a1b2c3d fix login bug\n9f8e7d6c add api endpoint\n\n";
        assert_eq!(
            parse_oneline_log(log),
            vec!["fix login bug", "add api endpoint"]
        );
    }

    #[test]
    fn oneline_keeps_lines_without_hash() {
        let log = "fix login bug\nadd feature";
        assert_eq!(parse_oneline_log(log), vec!["fix login bug", "add feature"]);
    }

    #[test]
    fn oneline_short_hex_word_is_not_a_hash() {
        assert_eq!(parse_oneline_log("add feature"), vec!["add feature"]);
        assert_eq!(parse_oneline_log("deadbeef"), vec!["deadbeef"]);
    }

    #[test]
    fn oneline_empty_input() {
        assert!(parse_oneline_log("").is_empty());
        assert!(parse_oneline_log("  \n\t\n").is_empty());
    }

    // ── diff stat ─────────────────────────────────────────────────

    #[test]
    fn diff_stat_counts_files_per_extension() {
        let stat = " src/app.py        | 10 +++++-----\n \
                    src/util.py       |  2 +-\n \
                    web/index.jsx     |  4 ++--\n \
                    Makefile          |  1 +\n \
                    4 files changed, 9 insertions(+), 8 deletions(-)\n";
        let counts = parse_diff_stat(stat);
        assert_eq!(counts.get("py"), Some(&2));
        assert_eq!(counts.get("jsx"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn diff_stat_binary_files() {
        let counts = parse_diff_stat(" assets/logo.png | Bin 0 -> 1234 bytes\n");
        assert_eq!(counts.get("png"), Some(&1));
    }

    #[test]
    fn extension_rules() {
        assert_eq!(extension_of("src/main.rs"), Some("rs"));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz"));
        assert_eq!(extension_of(".gitignore"), Some("gitignore"));
        assert_eq!(extension_of("src/{old.rs => new.go}"), Some("go"));
        assert_eq!(extension_of("config.d/Makefile"), None);
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of("trailing."), None);
    }
}
