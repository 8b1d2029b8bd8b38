//! Prompt quality scoring and rewriting.

use serde::{Deserialize, Serialize};

use crate::coach::vocabulary::{
    contains_any, FALLBACK_LANGUAGE, PROMPT_LANGUAGES, REWRITE_LANGUAGES, STRONG_VERBS,
    VAGUE_WORDS,
};

/// Score given to a prompt before any penalty.
pub const MAX_SCORE: u8 = 10;

const VAGUE_PENALTY: i32 = 3;
const LANGUAGE_PENALTY: i32 = 2;
const VERB_PENALTY: i32 = 2;
const LENGTH_PENALTY: i32 = 2;
const NAMING_PENALTY: i32 = 1;

/// Prompts with fewer words than this can be flagged as vague.
const VAGUE_WORD_LIMIT: usize = 5;
/// Prompts with fewer words than this are flagged as too short.
const SHORT_WORD_LIMIT: usize = 4;

/// Result of analyzing a single prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAnalysis {
    /// Clarity score in `0..=10`.
    pub score: u8,
    /// Problems found, in detection order.
    pub issues: Vec<String>,
    /// Suggested fixes, in detection order.
    pub improvements: Vec<String>,
    /// What the prompt appears to ask for.
    pub intent: PromptIntent,
    /// Rewritten version of the prompt.
    pub improved_prompt: String,
    /// Why the rewritten version works better.
    pub reasons: Vec<String>,
}

/// Intent recognized in a prompt, which selects the rewrite template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptIntent {
    /// A function that reverses a string.
    ReverseString,
    /// A function that calls an API.
    ApiFunction,
    /// Any other function.
    Function,
    /// A REST endpoint.
    Endpoint,
    /// A class.
    Class,
    /// Fixing a bug.
    Debug,
    /// Nothing specific recognized.
    General,
}

/// One entry of the rewrite table.
struct RewriteRule {
    intent: PromptIntent,
    matches: fn(&str) -> bool,
    build: fn(&str) -> String,
    verb: &'static str,
}

/// Rewrite rules in precedence order. The first matching rule wins and the
/// last rule always matches.
static REWRITE_RULES: [RewriteRule; 7] = [
    RewriteRule {
        intent: PromptIntent::ReverseString,
        matches: |t| t.contains("function") && (t.contains("reverse") || t.contains("string")),
        build: |lang| {
            format!(
                "Create a {lang} function called reverse_string() that takes a string parameter and returns it reversed"
            )
        },
        verb: "Create",
    },
    RewriteRule {
        intent: PromptIntent::ApiFunction,
        matches: |t| t.contains("function") && t.contains("api"),
        build: |lang| {
            format!(
                "Create a {lang} function that makes an API request to a given endpoint and returns the JSON response"
            )
        },
        verb: "Create",
    },
    RewriteRule {
        intent: PromptIntent::Function,
        matches: |t| t.contains("function"),
        build: |lang| {
            format!(
                "Create a {lang} function called process_data() that takes input parameters, processes them, and returns the result with proper error handling"
            )
        },
        verb: "Create",
    },
    RewriteRule {
        intent: PromptIntent::Endpoint,
        matches: |t| t.contains("api") || t.contains("endpoint"),
        build: |lang| {
            format!(
                "Create a {lang} REST API endpoint that handles GET requests, validates input, and returns JSON data"
            )
        },
        verb: "Create",
    },
    RewriteRule {
        intent: PromptIntent::Class,
        matches: |t| t.contains("class"),
        build: |lang| {
            format!(
                "Create a {lang} class called DataProcessor with methods for initialization, data processing, and result retrieval"
            )
        },
        verb: "Create",
    },
    RewriteRule {
        intent: PromptIntent::Debug,
        matches: |t| t.contains("fix") || t.contains("bug"),
        build: |lang| {
            format!("Debug this {lang} code and fix the error: [paste your code here with the error message]")
        },
        verb: "Debug",
    },
    RewriteRule {
        intent: PromptIntent::General,
        matches: |_| true,
        build: |lang| {
            format!(
                "Create a {lang} function called perform_task() that accomplishes [describe specific task] with clear input/output parameters"
            )
        },
        verb: "Create",
    },
];

/// Scores prompts against a fixed rubric and proposes a rewrite.
pub struct PromptQualityAnalyzer;

impl PromptQualityAnalyzer {
    /// Analyzes a prompt.
    ///
    /// Rejecting empty input is the caller's job; any string is accepted here.
    pub fn analyze(prompt: &str) -> PromptAnalysis {
        let text = prompt.to_lowercase();
        let word_count = prompt.split_whitespace().count();

        let mut issues = Vec::new();
        let mut improvements = Vec::new();
        let mut score = i32::from(MAX_SCORE);

        if contains_any(&text, &VAGUE_WORDS) && word_count < VAGUE_WORD_LIMIT {
            issues.push("Too vague — lacks specific details".to_string());
            improvements.push("Add specific details about what you want".to_string());
            score -= VAGUE_PENALTY;
        }

        let has_language = contains_any(&text, &PROMPT_LANGUAGES);
        if !has_language {
            issues.push("No programming language specified".to_string());
            improvements.push("Specify the language (e.g., 'in Python')".to_string());
            score -= LANGUAGE_PENALTY;
        }

        if !contains_any(&text, &STRONG_VERBS) {
            issues.push("Weak or missing action verb".to_string());
            improvements.push("Start with: 'Create', 'Write', 'Generate', or 'Build'".to_string());
            score -= VERB_PENALTY;
        }

        if word_count < SHORT_WORD_LIMIT {
            issues.push("Too short — needs more context".to_string());
            improvements.push("Describe input, output, and expected behavior".to_string());
            score -= LENGTH_PENALTY;
        }

        // Improvement without a matching issue.
        if text.contains("function") && !text.contains("called") && !text.contains("named") {
            improvements.push("Specify a function name for clarity".to_string());
            score -= NAMING_PENALTY;
        }

        let rule = Self::select_rule(&text);
        let language = Self::target_language(&text);

        let mut reasons = Vec::with_capacity(4);
        if has_language {
            reasons.push("Maintains language specification".to_string());
        } else {
            reasons.push(format!("Adds clear language target ({FALLBACK_LANGUAGE})"));
        }
        reasons.push("Includes specific function name".to_string());
        reasons.push("Describes input and output clearly".to_string());
        reasons.push(format!("Uses strong action verb ('{}')", rule.verb));

        PromptAnalysis {
            score: u8::try_from(score.max(0)).unwrap_or(0),
            issues,
            improvements,
            intent: rule.intent,
            improved_prompt: (rule.build)(language),
            reasons,
        }
    }

    /// Picks the language the rewrite targets from lowercased text.
    pub fn target_language(text: &str) -> &'static str {
        REWRITE_LANGUAGES
            .iter()
            .find(|(key, _)| text.contains(key))
            .map(|(_, name)| *name)
            .unwrap_or(FALLBACK_LANGUAGE)
    }

    fn select_rule(text: &str) -> &'static RewriteRule {
        REWRITE_RULES
            .iter()
            .find(|rule| (rule.matches)(text))
            .unwrap_or(&REWRITE_RULES[REWRITE_RULES.len() - 1])
    }
}
