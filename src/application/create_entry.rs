//! Create entry use case

use crate::domain::entry::{same_title, validate_title};
use crate::error::{Result, WikiError};
use crate::infrastructure::EntryStore;
use tracing::info;

/// Create a new entry.
///
/// Fails with a validation error when a required field is empty or the title
/// is unusable, and with a conflict when any existing title matches ignoring
/// case. Storage is untouched on failure.
pub fn create_entry(store: &impl EntryStore, title: &str, content: &str) -> Result<()> {
    if title.is_empty() || content.is_empty() {
        return Err(WikiError::ValidationFailed(
            "title and content are required".to_string(),
        ));
    }
    validate_title(title)?;

    for existing in store.list_titles()? {
        if same_title(&existing, title) {
            return Err(WikiError::Conflict(existing));
        }
    }

    store.put(title, content)?;
    info!(title, "created entry");
    Ok(())
}
