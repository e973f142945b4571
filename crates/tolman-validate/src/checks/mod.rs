//! Validation check modules.
//!
//! Each module performs one rule family; `run_all` fixes the order in which
//! failures are reported.

mod cross_field;
mod range;

use std::collections::BTreeMap;

use tolman_model::{Item, ToleranceId, ValidationError};

/// Run every check on an item with candidate overrides applied.
pub fn run_all(item: &Item, candidates: &BTreeMap<ToleranceId, f64>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // 1. Cross-field rule (Tolerance A vs Tolerance B)
    if let Some(error) = cross_field::check(item, candidates) {
        errors.push(error);
    }

    // 2. Floor/ceiling checks, tolerance list order
    for tolerance in &item.tolerances {
        errors.extend(range::check(tolerance, candidates));
    }

    errors
}
