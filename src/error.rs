//! Error types for pedia

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pedia application
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("Not a pedia directory: {0}")]
    NotWikiDirectory(PathBuf),

    #[error("No entry named \"{0}\"")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    ValidationFailed(String),

    #[error("An entry named \"{0}\" already exists")]
    Conflict(String),

    #[error("The encyclopedia has no entries yet")]
    EmptyStore,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WikiError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WikiError::NotWikiDirectory(_) => 2,
            WikiError::NotFound(_) => 3,
            WikiError::ValidationFailed(_) => 4,
            WikiError::Conflict(_) => 5,
            WikiError::EmptyStore => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WikiError::NotWikiDirectory(path) => {
                format!(
                    "Not a pedia directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'pedia init' in this directory to create a new wiki\n\
                    • Navigate to an existing pedia directory\n\
                    • Set PEDIA_ROOT environment variable to your wiki path",
                    path.display()
                )
            }
            WikiError::NotFound(title) => {
                format!(
                    "No entry named \"{}\"\n\n\
                    Suggestions:\n\
                    • Use 'pedia list' to see available entries\n\
                    • Entry lookup is exact, including case\n\
                    • Use 'pedia search {}' to find similar titles",
                    title, title
                )
            }
            WikiError::Conflict(title) => {
                format!(
                    "An entry named \"{}\" already exists\n\n\
                    Suggestions:\n\
                    • Titles are unique ignoring case\n\
                    • Use 'pedia edit {}' to change the existing entry\n\
                    • Pick a different title for the new entry",
                    title, title
                )
            }
            WikiError::EmptyStore => {
                "The encyclopedia has no entries yet\n\n\
                Suggestions:\n\
                • Use 'pedia new <title> <content>' to create the first entry"
                    .to_string()
            }
            WikiError::ValidationFailed(msg) => {
                format!(
                    "Invalid input: {}\n\n\
                    Suggestions:\n\
                    • Title and content must not be empty\n\
                    • Titles cannot contain path separators or control characters",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WikiError
pub type Result<T> = std::result::Result<T, WikiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_wiki_directory_suggestion() {
        let err = WikiError::NotWikiDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("pedia init"));
        assert!(msg.contains("PEDIA_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_not_found_suggestions() {
        let err = WikiError::NotFound("Python".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("pedia list"));
        assert!(msg.contains("pedia search Python"));
    }

    #[test]
    fn test_conflict_suggestions() {
        let err = WikiError::Conflict("Python".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("pedia edit Python"));
        assert!(msg.contains("ignoring case"));
    }

    #[test]
    fn test_empty_store_suggestions() {
        let err = WikiError::EmptyStore;
        let msg = err.display_with_suggestions();
        assert!(msg.contains("pedia new"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            WikiError::NotWikiDirectory(PathBuf::from("/tmp")).exit_code(),
            2
        );
        assert_eq!(WikiError::NotFound("x".to_string()).exit_code(), 3);
        assert_eq!(
            WikiError::ValidationFailed("empty".to_string()).exit_code(),
            4
        );
        assert_eq!(WikiError::Conflict("x".to_string()).exit_code(), 5);
        assert_eq!(WikiError::EmptyStore.exit_code(), 6);
        assert_eq!(WikiError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = WikiError::Config("bad key".to_string());
        let msg = err.display_with_suggestions();
        // Thiserror prefixes with the error type
        assert_eq!(msg, "Configuration error: bad key");
    }
}
