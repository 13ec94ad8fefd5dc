//! Initialize wiki use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemStore};
use std::fs;
use std::path::Path;

/// Initialize a new wiki at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create store for this path
    let store = FileSystemStore::new(path.to_path_buf());

    // Initialize .pedia marker and entries directory
    store.initialize()?;

    // Create and save default config
    let config = Config::new();
    store.save_config(&config)?;

    println!("Initialized pedia wiki at {}", path.display());

    Ok(())
}
