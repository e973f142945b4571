//! Validation outcomes.
//!
//! A failed check is a data value attached to a tolerance, not an error in
//! the `Result` sense. Callers collect these and render them inline next to
//! the field they belong to.

use serde::{Deserialize, Serialize};

use crate::ids::ToleranceId;

/// Name of the lower half of the fixed cross-field pair.
pub const TOLERANCE_A_NAME: &str = "Tolerance A";
/// Name of the upper half of the fixed cross-field pair.
pub const TOLERANCE_B_NAME: &str = "Tolerance B";

/// Validation failure - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The cross-field rule: Tolerance A exceeds Tolerance B.
    /// Attached to Tolerance A's id.
    CrossField { tolerance_id: ToleranceId },
    /// Effective value sits below the tolerance's floor.
    BelowFloor { tolerance_id: ToleranceId, floor: f64 },
    /// Effective value sits above the tolerance's ceiling.
    AboveCeiling {
        tolerance_id: ToleranceId,
        ceiling: f64,
    },
}

impl ValidationError {
    /// Id of the tolerance this failure is attached to.
    pub fn tolerance_id(&self) -> &ToleranceId {
        match self {
            ValidationError::CrossField { tolerance_id } => tolerance_id,
            ValidationError::BelowFloor { tolerance_id, .. } => tolerance_id,
            ValidationError::AboveCeiling { tolerance_id, .. } => tolerance_id,
        }
    }

    /// Message for inline rendering next to the offending field.
    pub fn message(&self) -> String {
        match self {
            ValidationError::CrossField { .. } => {
                "Tolerance A cannot be greater than Tolerance B".to_string()
            }
            ValidationError::BelowFloor { floor, .. } => {
                format!("Value cannot be less than {}", floor)
            }
            ValidationError::AboveCeiling { ceiling, .. } => {
                format!("Value cannot be greater than {}", ceiling)
            }
        }
    }
}
