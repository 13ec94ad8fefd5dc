//! Entry title rules
//!
//! An entry is a titled markdown document; the title is its identity.
//! Stored casing is preserved, but two titles equal after lowercasing
//! name the same entry.

use crate::error::{Result, WikiError};
use regex::Regex;
use std::sync::OnceLock;

/// Regex for titles that are safe to use as file stems:
/// no path separators, no control characters
fn title_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^/\\\x00-\x1F]+$").unwrap())
}

/// Validate a title for use as an entry identifier.
/// Titles become file stems, so path separators and control characters
/// are rejected as validation errors rather than surfacing as filesystem faults.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(WikiError::ValidationFailed(
            "title must not be empty".to_string(),
        ));
    }

    if !title_regex().is_match(title) || title == "." || title == ".." {
        return Err(WikiError::ValidationFailed(format!(
            "invalid title: \"{}\"",
            title
        )));
    }

    Ok(())
}

/// Case-insensitive title identity: two titles name the same entry
/// if they are equal after lowercasing
pub fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_titles() {
        assert!(validate_title("Python").is_ok());
        assert!(validate_title("C++").is_ok());
        assert!(validate_title("Operating Systems").is_ok());
        assert!(validate_title("naïve sets").is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = validate_title("");
        match result.unwrap_err() {
            WikiError::ValidationFailed(msg) => assert!(msg.contains("empty")),
            _ => panic!("Expected ValidationFailed error"),
        }
    }

    #[test]
    fn test_whitespace_only_title_rejected() {
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_path_separators_rejected() {
        assert!(validate_title("a/b").is_err());
        assert!(validate_title("a\\b").is_err());
        assert!(validate_title("../escape").is_err());
    }

    #[test]
    fn test_dot_components_rejected() {
        assert!(validate_title(".").is_err());
        assert!(validate_title("..").is_err());
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(validate_title("a\nb").is_err());
        assert!(validate_title("a\tb").is_err());
    }

    #[test]
    fn test_same_title_ignores_case() {
        assert!(same_title("Python", "python"));
        assert!(same_title("PYTHON", "python"));
        assert!(!same_title("Python", "Pythonic"));
    }

}
