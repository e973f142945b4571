//! Root store file type.

use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tolman_model::Item;

/// Current store file schema version.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Fixed identifier the item list is stored under.
pub const STORE_KEY: &str = "items";

/// Default on-disk location: the store key with a `.json` extension, in the
/// working directory.
pub fn default_store_path() -> PathBuf {
    PathBuf::from(format!("{STORE_KEY}.json"))
}

/// Root store file structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreFile {
    /// Schema version (for future migrations).
    pub schema_version: u32,

    /// When the store was first created.
    pub created_at: String,

    /// When the store was last saved.
    pub last_saved_at: String,

    /// The item list, in display order.
    pub items: Vec<Item>,
}

impl StoreFile {
    /// Create a new store file around an item list.
    pub fn new(items: Vec<Item>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            created_at: now.clone(),
            last_saved_at: now,
            items,
        }
    }

    /// Update the last saved timestamp.
    pub fn touch(&mut self) {
        self.last_saved_at = Utc::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_starts_at_current_version() {
        let store = StoreFile::new(vec![]);
        assert_eq!(store.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(store.created_at, store.last_saved_at);
    }

    #[test]
    fn test_touch_moves_only_the_save_timestamp() {
        let mut store = StoreFile::new(vec![]);
        let created = store.created_at.clone();
        store.touch();
        assert_eq!(store.created_at, created);
    }

    #[test]
    fn test_default_path_uses_the_store_key() {
        assert_eq!(default_store_path(), PathBuf::from("items.json"));
    }
}
