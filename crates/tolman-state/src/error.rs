//! Error types for session and workbench operations.
//!
//! Validation failures are data values carried by the session, never errors;
//! this enum covers the few operations that can actually be refused.

use thiserror::Error;
use tolman_model::ItemId;

/// Errors from session lifecycle operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// An operation that needs an open session was called without one.
    #[error("No edit session is open")]
    NoActiveSession,

    /// Apply was called while validation errors are outstanding.
    #[error("Cannot apply: {count} validation error(s) outstanding")]
    ValidationOutstanding {
        /// Number of errors blocking the apply.
        count: usize,
    },

    /// The referenced item does not exist in the store.
    #[error("Unknown item: {item_id}")]
    UnknownItem {
        /// The id that matched no stored item.
        item_id: ItemId,
    },
}

/// Convenience alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
