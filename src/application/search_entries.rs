//! Search entries use case

use crate::application::view_entry::{view_entry, EntryPage};
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Result of a title search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query matched a title exactly (ignoring case); the entry is rendered
    Entry(EntryPage),
    /// Titles containing the query as a substring (ignoring case), in store order
    Matches(Vec<String>),
}

/// Search entry titles, case-insensitively.
///
/// The first exact match encountered during the scan short-circuits to that
/// entry's rendered view; otherwise every substring match is collected.
pub fn search_entries(store: &impl EntryStore, query: &str) -> Result<SearchOutcome> {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();

    for title in store.list_titles()? {
        let haystack = title.to_lowercase();
        if haystack == needle {
            return Ok(SearchOutcome::Entry(view_entry(store, &title)?));
        }
        if haystack.contains(&needle) {
            matches.push(title);
        }
    }

    Ok(SearchOutcome::Matches(matches))
}
