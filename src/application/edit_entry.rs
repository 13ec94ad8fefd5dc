//! Edit entry use case

use crate::domain::entry::validate_title;
use crate::error::{Result, WikiError};
use crate::infrastructure::EntryStore;
use tracing::info;

/// Overwrite an entry's content unconditionally.
///
/// There is no existence check: editing a title that has no entry creates one.
pub fn edit_entry(store: &impl EntryStore, title: &str, content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(WikiError::ValidationFailed(
            "content is required".to_string(),
        ));
    }
    validate_title(title)?;

    store.put(title, content)?;
    info!(title, "saved entry");
    Ok(())
}

/// Stored content for pre-populating an edit form.
/// `None` when the title has no entry yet.
pub fn current_content(store: &impl EntryStore, title: &str) -> Result<Option<String>> {
    store.get(title)
}
