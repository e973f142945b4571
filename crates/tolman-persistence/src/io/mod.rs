//! File I/O operations.

mod load;
mod save;

pub use load::{load_or_seed, load_store};
pub use save::save_store;
