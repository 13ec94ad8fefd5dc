//! Configuration management

use crate::error::{Result, WikiError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_entries_dir() -> String {
    "entries".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory under the wiki root holding one markdown file per entry
    #[serde(default = "default_entries_dir")]
    pub entries_dir: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            entries_dir: default_entries_dir(),
            created: Utc::now(),
        }
    }

    /// Load config from .pedia/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".pedia").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WikiError::NotWikiDirectory(path.to_path_buf())
            } else {
                WikiError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| WikiError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .pedia/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let pedia_dir = path.join(".pedia");
        let config_path = pedia_dir.join("config.toml");

        // Ensure .pedia directory exists
        if !pedia_dir.exists() {
            fs::create_dir(&pedia_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| WikiError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.entries_dir, "entries");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new();

        // Save config
        config.save_to_dir(temp.path()).unwrap();

        // Check .pedia directory was created
        assert!(temp.path().join(".pedia").exists());
        assert!(temp.path().join(".pedia/config.toml").exists());

        // Load config
        let loaded = Config::load_from_dir(temp.path()).unwrap();

        // Verify it matches
        assert_eq!(loaded.entries_dir, config.entries_dir);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        // Try to load config from directory without .pedia
        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            WikiError::NotWikiDirectory(_) => {}
            _ => panic!("Expected NotWikiDirectory error"),
        }
    }

    #[test]
    fn test_missing_entries_dir_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".pedia")).unwrap();
        fs::write(
            temp.path().join(".pedia").join("config.toml"),
            "created = \"2025-01-17T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.entries_dir, "entries");
    }
}
