//! List entries use case

use crate::error::Result;
use crate::infrastructure::EntryStore;

/// All known entry titles, in store order
pub fn list_entries(store: &impl EntryStore) -> Result<Vec<String>> {
    store.list_titles()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FileSystemStore;
    use tempfile::TempDir;

    #[test]
    fn test_list_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        assert!(list_entries(&store).unwrap().is_empty());
    }

    #[test]
    fn test_list_returns_store_order() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());

        store.put("Python", "a").unwrap();
        store.put("Java", "b").unwrap();

        assert_eq!(list_entries(&store).unwrap(), vec!["Java", "Python"]);
    }
}
