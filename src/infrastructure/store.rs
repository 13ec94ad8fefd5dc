//! File system entry store

use crate::domain::entry::validate_title;
use crate::error::{Result, WikiError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Abstract store mapping entry titles to markdown content.
///
/// Handlers never touch the filesystem directly; they read and write entries
/// through this trait, which also makes them testable against in-memory doubles.
pub trait EntryStore {
    /// Every known entry title, sorted lexicographically
    fn list_titles(&self) -> Result<Vec<String>>;

    /// Case-sensitive existence check against the stored identifier
    fn exists(&self, title: &str) -> bool;

    /// Case-sensitive exact lookup; `None` when the title has no entry
    fn get(&self, title: &str) -> Result<Option<String>>;

    /// Create a new entry or overwrite an existing one unconditionally
    fn put(&self, title: &str, content: &str) -> Result<()>;
}

/// Filesystem implementation: one markdown file per entry under the wiki root
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
    entries_dir: String,
}

impl FileSystemStore {
    /// Create a store with the given root directory and the default entries directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore {
            root,
            entries_dir: "entries".to_string(),
        }
    }

    /// Open a store at an initialized wiki root, honoring the configured entries directory
    pub fn open(root: PathBuf) -> Result<Self> {
        let config = Config::load_from_dir(&root)?;
        Ok(FileSystemStore {
            root,
            entries_dir: config.entries_dir,
        })
    }

    /// Discover the wiki root by walking up from the current directory.
    /// First checks the PEDIA_ROOT environment variable, then falls back to discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check PEDIA_ROOT environment variable first
        if let Ok(root_path) = std::env::var("PEDIA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_pedia_dir(&path) {
                return Self::open(path);
            } else {
                return Err(WikiError::Config(format!(
                    "PEDIA_ROOT is set to '{}' but no .pedia directory found. \
                    Run 'pedia init' in that directory or unset PEDIA_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the wiki root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_pedia_dir(&current) {
                return Self::open(current);
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .pedia
                    return Err(WikiError::NotWikiDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .pedia directory
    fn has_pedia_dir(path: &Path) -> bool {
        path.join(".pedia").is_dir()
    }

    /// Check if .pedia directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_pedia_dir(&self.root)
    }

    /// Create the .pedia marker and the entries directory
    pub fn initialize(&self) -> Result<()> {
        let pedia_dir = self.root.join(".pedia");

        if pedia_dir.exists() {
            return Err(WikiError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&pedia_dir)?;
        fs::create_dir_all(self.root.join(&self.entries_dir))?;
        Ok(())
    }

    /// Load configuration from .pedia/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .pedia/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Path of the file backing `title`.
    /// Invalid titles cannot name a stored entry; callers validate before `put`.
    fn entry_path(&self, title: &str) -> Option<PathBuf> {
        validate_title(title).ok()?;
        Some(
            self.root
                .join(&self.entries_dir)
                .join(format!("{}.md", title)),
        )
    }
}

impl EntryStore for FileSystemStore {
    fn list_titles(&self) -> Result<Vec<String>> {
        let entries_path = self.root.join(&self.entries_dir);

        let dir = match fs::read_dir(&entries_path) {
            Ok(dir) => dir,
            // A wiki with no entries directory simply has no entries
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(WikiError::Io(e)),
        };

        let mut titles = Vec::new();
        for entry in dir {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if let Some(stem) = name.strip_suffix(".md") {
                if !stem.is_empty() {
                    titles.push(stem.to_string());
                }
            }
        }

        titles.sort();
        Ok(titles)
    }

    fn exists(&self, title: &str) -> bool {
        self.entry_path(title).is_some_and(|p| p.exists())
    }

    fn get(&self, title: &str) -> Result<Option<String>> {
        let Some(path) = self.entry_path(title) else {
            return Ok(None);
        };

        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WikiError::Io(e)),
        }
    }

    fn put(&self, title: &str, content: &str) -> Result<()> {
        let Some(path) = self.entry_path(title) else {
            return Err(WikiError::ValidationFailed(format!(
                "invalid title: \"{}\"",
                title
            )));
        };

        // Create the entries directory if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        debug!(title, bytes = content.len(), "writing entry");
        fs::write(&path, content).map_err(WikiError::Io)
    }
}
