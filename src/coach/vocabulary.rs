//! Fixed vocabularies shared by the analyzers.

/// Words that make a short prompt vague.
pub const VAGUE_WORDS: [&str; 5] = ["make", "do", "thing", "stuff", "it"];

/// Language names recognized when checking whether a prompt names a language.
pub const PROMPT_LANGUAGES: [&str; 11] = [
    "python",
    "javascript",
    "java",
    "go",
    "rust",
    "typescript",
    "c++",
    "ruby",
    "php",
    "swift",
    "kotlin",
];

/// Action verbs that give a prompt a clear instruction.
pub const STRONG_VERBS: [&str; 6] = ["create", "write", "generate", "build", "implement", "develop"];

/// Languages a rewritten prompt can target, in detection priority order.
///
/// `javascript` must stay ahead of `java` so the longer name wins.
pub const REWRITE_LANGUAGES: [(&str, &str); 6] = [
    ("python", "Python"),
    ("javascript", "JavaScript"),
    ("java", "Java"),
    ("typescript", "TypeScript"),
    ("go", "Go"),
    ("rust", "Rust"),
];

/// Language used when nothing else is detected.
pub const FALLBACK_LANGUAGE: &str = "Python";

/// Commit keywords that signal bug fixing.
pub const FIX_KEYWORDS: [&str; 4] = ["fix", "bug", "error", "issue"];

/// Commit keywords that signal feature work.
pub const FEATURE_KEYWORDS: [&str; 4] = ["add", "feature", "implement", "create"];

/// Commit keywords that signal refactoring.
pub const REFACTOR_KEYWORDS: [&str; 4] = ["refactor", "clean", "improve", "optimize"];

/// Commit keywords that signal testing work.
pub const TEST_KEYWORDS: [&str; 3] = ["test", "spec", "coverage"];

/// Maps changed-file extensions to a language name.
#[derive(Debug, Clone, Copy)]
pub struct LanguageRule {
    /// File extensions, without the leading dot.
    pub extensions: &'static [&'static str],
    /// Display name of the language.
    pub name: &'static str,
}

impl LanguageRule {
    /// Lowercase form of the name, as searched for in commit messages.
    pub fn keyword(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Language detection rules for commit history, in output order.
pub const LANGUAGE_RULES: [LanguageRule; 6] = [
    LanguageRule {
        extensions: &["py"],
        name: "Python",
    },
    LanguageRule {
        extensions: &["js", "jsx"],
        name: "JavaScript",
    },
    LanguageRule {
        extensions: &["ts", "tsx"],
        name: "TypeScript",
    },
    LanguageRule {
        extensions: &["go"],
        name: "Go",
    },
    LanguageRule {
        extensions: &["rs"],
        name: "Rust",
    },
    LanguageRule {
        extensions: &["java"],
        name: "Java",
    },
];

/// Returns true if `text` contains any of `words` as a substring.
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_any_matches_substrings() {
        assert!(contains_any("refactoring the parser", &REFACTOR_KEYWORDS));
        assert!(contains_any("debugging", &FIX_KEYWORDS));
        assert!(!contains_any("update readme", &TEST_KEYWORDS));
    }

    #[test]
    fn contains_any_empty_word_list() {
        assert!(!contains_any("anything", &[]));
    }

    #[test]
    fn rewrite_languages_check_javascript_before_java() {
        let javascript = REWRITE_LANGUAGES
            .iter()
            .position(|(key, _)| *key == "javascript");
        let java = REWRITE_LANGUAGES.iter().position(|(key, _)| *key == "java");
        assert!(javascript < java);
    }

    #[test]
    fn language_rule_keyword_is_lowercase() {
        let keywords: Vec<String> = LANGUAGE_RULES.iter().map(LanguageRule::keyword).collect();
        assert_eq!(
            keywords,
            ["python", "javascript", "typescript", "go", "rust", "java"]
        );
    }
}
