//! State core for the tolerance manager.
//!
//! Three pieces, explicitly owned and injectable rather than ambient: the
//! authoritative [`ItemStore`], the cross-item [`ChangeLedger`], and at most
//! one open [`EditSession`]. [`Workbench`] owns all three and is the surface
//! a frontend drives one discrete action at a time.

pub mod error;
pub mod ledger;
pub mod session;
pub mod store;
pub mod workbench;

pub use error::SessionError;
pub use ledger::ChangeLedger;
pub use session::{AppliedEdit, EditSession};
pub use store::ItemStore;
pub use workbench::Workbench;
