//! Utility functions and helpers.

use crate::coach::CoachError;

/// Checks prompt text before it is analyzed and returns it trimmed.
pub fn validate_prompt(input: &str) -> Result<&str, CoachError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoachError::InvalidInput(
            "Prompt cannot be empty".to_string(),
        ));
    }

    Ok(trimmed)
}

/// Joins command-line words into a single prompt.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_prompt_trims() {
        assert_eq!(
            validate_prompt("  write a parser \n").unwrap(),
            "write a parser"
        );
    }

    #[test]
    fn validate_prompt_empty() {
        assert!(matches!(
            validate_prompt(""),
            Err(CoachError::InvalidInput(_))
        ));
    }

    #[test]
    fn validate_prompt_whitespace_only() {
        let err = validate_prompt(" \t\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Prompt cannot be empty");
    }

    #[test]
    fn join_words_with_spaces() {
        assert_eq!(join_words(&["create", "a", "function"]), "create a function");
        assert_eq!(join_words::<&str>(&[]), "");
    }
}
