//! Floor and ceiling checks.

use std::collections::BTreeMap;

use tolman_model::{Tolerance, ToleranceId, ValidationError};

use crate::effective::effective_value;

/// Check one tolerance against its bounds. The two checks are independent,
/// so a malformed `floor > ceiling` pair reports both failures.
pub fn check(
    tolerance: &Tolerance,
    candidates: &BTreeMap<ToleranceId, f64>,
) -> Vec<ValidationError> {
    let value = effective_value(tolerance, candidates);
    let mut errors = Vec::new();

    if value < tolerance.floor {
        errors.push(ValidationError::BelowFloor {
            tolerance_id: tolerance.id.clone(),
            floor: tolerance.floor,
        });
    }

    if value > tolerance.ceiling {
        errors.push(ValidationError::AboveCeiling {
            tolerance_id: tolerance.id.clone(),
            ceiling: tolerance.ceiling,
        });
    }

    errors
}
