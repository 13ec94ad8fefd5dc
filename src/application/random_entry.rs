//! Random entry use case

use crate::application::view_entry::{view_entry, EntryPage};
use crate::error::{Result, WikiError};
use crate::infrastructure::EntryStore;
use rand::seq::SliceRandom;

/// Render one entry chosen uniformly at random.
/// An empty store is an explicit error, not a crash.
pub fn random_entry(store: &impl EntryStore) -> Result<EntryPage> {
    let titles = store.list_titles()?;

    let title = titles
        .choose(&mut rand::thread_rng())
        .ok_or(WikiError::EmptyStore)?;

    view_entry(store, title)
}
