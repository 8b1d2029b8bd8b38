//! Workflow recommendations for each commit pattern.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the primary language when a table is rendered.
const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// Dominant working style detected from commit history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternType {
    /// Mostly fixes bugs.
    BugHunter,
    /// Mostly adds features.
    FeatureBuilder,
    /// Mostly refactors and optimizes.
    CodeOptimizer,
    /// Mostly writes tests.
    TestEngineer,
    /// No single dominant activity.
    FullStackDeveloper,
}

/// A recommended prompt for the user's workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSuggestion {
    /// Short title of the workflow.
    pub title: String,
    /// Prompt to give the assistant, with the language filled in.
    pub prompt_template: String,
    /// When and why to use it.
    pub rationale: String,
}

/// Static workflow entry; `prompt` may contain the language placeholder.
struct WorkflowTemplate {
    title: &'static str,
    prompt: &'static str,
    rationale: &'static str,
}

impl WorkflowTemplate {
    fn render(&self, language: &str) -> WorkflowSuggestion {
        WorkflowSuggestion {
            title: self.title.to_string(),
            prompt_template: self.prompt.replace(LANGUAGE_PLACEHOLDER, language),
            rationale: self.rationale.to_string(),
        }
    }
}

static BUG_HUNTER_WORKFLOWS: [WorkflowTemplate; 4] = [
    WorkflowTemplate {
        title: "Debug Error Messages",
        prompt: "Debug this {language} error: [paste error] in code: [paste code]",
        rationale: "You fix a lot of bugs - use your assistant to understand errors faster",
    },
    WorkflowTemplate {
        title: "Code Review for Bugs",
        prompt: "Review this {language} code for potential bugs and edge cases: [paste code]",
        rationale: "Catch issues before they become bugs",
    },
    WorkflowTemplate {
        title: "Add Error Handling",
        prompt: "Add comprehensive error handling to this {language} function: [paste code]",
        rationale: "Make your code more robust",
    },
    WorkflowTemplate {
        title: "Write Defensive Tests",
        prompt: "Generate {language} unit tests that cover edge cases for: [paste function]",
        rationale: "Prevent regressions",
    },
];

static FEATURE_BUILDER_WORKFLOWS: [WorkflowTemplate; 4] = [
    WorkflowTemplate {
        title: "Rapid Prototyping",
        prompt: "Create a {language} function that implements [feature description] with clear input/output",
        rationale: "You build features often - prototype faster with your assistant",
    },
    WorkflowTemplate {
        title: "API Endpoint Generator",
        prompt: "Create a {language} REST API endpoint that handles [operation] with validation",
        rationale: "Speed up API development",
    },
    WorkflowTemplate {
        title: "Database Schema",
        prompt: "Generate a {language} database model for [entity] with proper relationships",
        rationale: "Design data structures quickly",
    },
    WorkflowTemplate {
        title: "Add Feature Tests",
        prompt: "Generate integration tests for this {language} feature: [paste code]",
        rationale: "Ensure features work end-to-end",
    },
];

static CODE_OPTIMIZER_WORKFLOWS: [WorkflowTemplate; 4] = [
    WorkflowTemplate {
        title: "Refactor for Readability",
        prompt: "Refactor this {language} code for better readability and maintainability: [paste code]",
        rationale: "You care about clean code - use your assistant to improve it",
    },
    WorkflowTemplate {
        title: "Performance Optimization",
        prompt: "Optimize this {language} code for better performance: [paste code]",
        rationale: "Make code faster and more efficient",
    },
    WorkflowTemplate {
        title: "Extract Reusable Functions",
        prompt: "Extract reusable utility functions from this {language} code: [paste code]",
        rationale: "Reduce duplication",
    },
    WorkflowTemplate {
        title: "Add Documentation",
        prompt: "Add comprehensive docstrings and comments to this {language} code: [paste code]",
        rationale: "Make code self-documenting",
    },
];

static TEST_ENGINEER_WORKFLOWS: [WorkflowTemplate; 4] = [
    WorkflowTemplate {
        title: "Unit Test Generator",
        prompt: "Generate comprehensive {language} unit tests for this function: [paste function]",
        rationale: "You write a lot of tests - automate test creation",
    },
    WorkflowTemplate {
        title: "Mock Data Generator",
        prompt: "Create {language} mock data for testing this API: [paste API spec]",
        rationale: "Speed up test data creation",
    },
    WorkflowTemplate {
        title: "Integration Test Suite",
        prompt: "Generate {language} integration tests for these components: [paste components]",
        rationale: "Test system interactions",
    },
    WorkflowTemplate {
        title: "Test Edge Cases",
        prompt: "Generate {language} tests for edge cases and error conditions in: [paste code]",
        rationale: "Improve test coverage",
    },
];

static FULL_STACK_WORKFLOWS: [WorkflowTemplate; 4] = [
    WorkflowTemplate {
        title: "Quick Function Generator",
        prompt: "Create a {language} function that [describe specific task] with proper types",
        rationale: "General-purpose code generation",
    },
    WorkflowTemplate {
        title: "Code Explanation",
        prompt: "Explain what this {language} code does and how it works: [paste code]",
        rationale: "Understand complex codebases",
    },
    WorkflowTemplate {
        title: "Boilerplate Generator",
        prompt: "Generate {language} boilerplate code for [type of project/feature]",
        rationale: "Skip repetitive setup",
    },
    WorkflowTemplate {
        title: "Code Converter",
        prompt: "Convert this code from [language] to {language}: [paste code]",
        rationale: "Work across different languages",
    },
];

impl PatternType {
    /// Every pattern type, in decision precedence order.
    pub const ALL: [PatternType; 5] = [
        PatternType::BugHunter,
        PatternType::FeatureBuilder,
        PatternType::CodeOptimizer,
        PatternType::TestEngineer,
        PatternType::FullStackDeveloper,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            PatternType::BugHunter => "Bug Hunter",
            PatternType::FeatureBuilder => "Feature Builder",
            PatternType::CodeOptimizer => "Code Optimizer",
            PatternType::TestEngineer => "Test Engineer",
            PatternType::FullStackDeveloper => "Full-Stack Developer",
        }
    }

    /// Icon shown next to the label in terminal output.
    pub fn icon(&self) -> &'static str {
        match self {
            PatternType::BugHunter => "🔧",
            PatternType::FeatureBuilder => "🚀",
            PatternType::CodeOptimizer => "✨",
            PatternType::TestEngineer => "🧪",
            PatternType::FullStackDeveloper => "💻",
        }
    }

    /// Renders the four workflows for this pattern in `language`.
    pub fn workflows(&self, language: &str) -> [WorkflowSuggestion; 4] {
        self.templates().each_ref().map(|t| t.render(language))
    }

    fn templates(&self) -> &'static [WorkflowTemplate; 4] {
        match self {
            PatternType::BugHunter => &BUG_HUNTER_WORKFLOWS,
            PatternType::FeatureBuilder => &FEATURE_BUILDER_WORKFLOWS,
            PatternType::CodeOptimizer => &CODE_OPTIMIZER_WORKFLOWS,
            PatternType::TestEngineer => &TEST_ENGINEER_WORKFLOWS,
            PatternType::FullStackDeveloper => &FULL_STACK_WORKFLOWS,
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}
