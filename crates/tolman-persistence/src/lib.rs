//! Persistent storage for the tolerance item store.
//!
//! The item list lives in a single JSON store file, keyed on disk by the
//! fixed [`STORE_KEY`] name. Loading a path with no file behind it falls
//! back to the built-in seed, the state a fresh installation starts from.
//!
//! # File Format
//!
//! Pretty-printed JSON with a small envelope:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "created_at": "2026-08-25T12:00:00+00:00",
//!   "last_saved_at": "2026-08-25T12:00:00+00:00",
//!   "items": [ ... ]
//! }
//! ```
//!
//! # Atomic Writes
//!
//! Saves go through a temp file, sync, and rename so a crash mid-write
//! leaves the previous store intact.

mod error;
mod io;
mod seed;
mod store_file;

pub use error::{PersistenceError, Result};
pub use io::{load_or_seed, load_store, save_store};
pub use seed::seed_items;
pub use store_file::{CURRENT_SCHEMA_VERSION, STORE_KEY, StoreFile, default_store_path};
