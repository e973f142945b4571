//! Pure validation engine for tolerance edits.
//!
//! The engine never looks at stored state on its own: callers pass the item
//! plus a map of candidate value overrides, and get back every failure the
//! overridden item would have. Calling it twice with the same inputs yields
//! the same failures in the same order.

mod checks;
mod effective;

pub use effective::effective_value;

use std::collections::BTreeMap;

use tolman_model::{Item, ToleranceId, ValidationError};

/// Validate an item with candidate overrides applied.
///
/// Failures come back in a fixed order: the cross-field rule first, then
/// floor/ceiling failures per tolerance in the item's list order, floor
/// before ceiling. Candidate entries whose id matches no tolerance of the
/// item are ignored.
pub fn validate(item: &Item, candidates: &BTreeMap<ToleranceId, f64>) -> Vec<ValidationError> {
    checks::run_all(item, candidates)
}
