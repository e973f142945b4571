//! Store loading operations.

use std::fs;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::seed::seed_items;
use crate::store_file::{CURRENT_SCHEMA_VERSION, StoreFile};

/// Load the store file at `path`.
pub fn load_store(path: &Path) -> Result<StoreFile> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let store: StoreFile =
        serde_json::from_slice(&bytes).map_err(|e| PersistenceError::Malformed {
            path: path.to_path_buf(),
            source: e,
        })?;

    if store.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: store.schema_version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    tracing::info!("Loaded item store from {}", path.display());
    Ok(store)
}

/// Load the store file, falling back to the built-in seed when no file
/// exists yet.
pub fn load_or_seed(path: &Path) -> Result<StoreFile> {
    if path.exists() {
        return load_store(path);
    }
    tracing::info!(
        "No store file at {}, starting from seed data",
        path.display()
    );
    Ok(StoreFile::new(seed_items()))
}
