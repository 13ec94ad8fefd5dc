//! View entry use case

use crate::domain::markup;
use crate::error::{Result, WikiError};
use crate::infrastructure::EntryStore;

/// A rendered entry ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPage {
    pub title: String,
    pub html: String,
}

/// Look up an entry by exact title and render its markdown to HTML
pub fn view_entry(store: &impl EntryStore, title: &str) -> Result<EntryPage> {
    match store.get(title)? {
        Some(content) => Ok(EntryPage {
            title: title.to_string(),
            html: markup::render(&content),
        }),
        None => Err(WikiError::NotFound(title.to_string())),
    }
}
