//! CLI library components for the Tolerance Manager.

pub mod logging;
pub mod shell;
