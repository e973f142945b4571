//! The cross-field rule: Tolerance A cannot be greater than Tolerance B.
//!
//! The pair is located by exact name. The rule only applies when both
//! halves exist on the item; otherwise it is skipped entirely.

use std::collections::BTreeMap;

use tolman_model::{Item, TOLERANCE_A_NAME, TOLERANCE_B_NAME, ToleranceId, ValidationError};

use crate::effective::effective_value;

/// Check the pair. A failure is attached to Tolerance A's id, the field the
/// user must lower.
pub fn check(item: &Item, candidates: &BTreeMap<ToleranceId, f64>) -> Option<ValidationError> {
    let a = item.tolerance_named(TOLERANCE_A_NAME)?;
    let b = item.tolerance_named(TOLERANCE_B_NAME)?;

    if effective_value(a, candidates) > effective_value(b, candidates) {
        return Some(ValidationError::CrossField {
            tolerance_id: a.id.clone(),
        });
    }
    None
}
