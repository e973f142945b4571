use std::collections::BTreeMap;

use tolman_model::{Tolerance, ToleranceId};

/// Value a tolerance would hold after applying the candidate overrides:
/// the override when one exists, the committed value otherwise.
pub fn effective_value(tolerance: &Tolerance, candidates: &BTreeMap<ToleranceId, f64>) -> f64 {
    candidates
        .get(&tolerance.id)
        .copied()
        .unwrap_or(tolerance.value)
}
