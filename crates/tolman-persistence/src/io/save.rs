//! Store saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::store_file::StoreFile;

/// Save the store file.
///
/// Uses atomic write (temp file + rename) to prevent data corruption on
/// crash or power loss. The last-saved timestamp is refreshed first.
pub fn save_store(store: &mut StoreFile, path: &Path) -> Result<()> {
    store.touch();

    let mut bytes = serde_json::to_vec_pretty(store)
        .map_err(|e| PersistenceError::Serialization { source: e })?;
    bytes.push(b'\n');

    // Write to a temp file first, then rename for atomicity
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| PersistenceError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PersistenceError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| PersistenceError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved item store to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_items;
    use tempfile::tempdir;

    #[test]
    fn test_save_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");

        let mut store = StoreFile::new(seed_items());
        save_store(&mut store, &path).unwrap();

        assert!(path.exists());
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"schema_version\": 1,"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");

        let mut store = StoreFile::new(seed_items());
        save_store(&mut store, &path).unwrap();
        save_store(&mut store, &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
