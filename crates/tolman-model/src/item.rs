use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::{ItemId, ToleranceId};

/// A bounded numeric value attached to an item.
///
/// `floor <= value <= ceiling` is the intended state. It is checked by the
/// validation engine, not enforced at construction, so out-of-range drafts
/// stay representable while being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub id: ToleranceId,
    pub name: String,
    pub value: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl Tolerance {
    /// Copy of this tolerance carrying a different value; id, name and
    /// bounds are preserved.
    pub fn with_value(&self, value: f64) -> Tolerance {
        Tolerance {
            value,
            ..self.clone()
        }
    }

    /// True when the committed value sits inside `[floor, ceiling]`.
    pub fn is_in_range(&self) -> bool {
        self.value >= self.floor && self.value <= self.ceiling
    }
}

/// An item owning an ordered collection of tolerances.
///
/// Items are created from seed data and never deleted; the only mutation
/// the store permits is whole-array replacement of `tolerances`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub tolerances: Vec<Tolerance>,
}

impl Item {
    pub fn tolerance(&self, id: &ToleranceId) -> Option<&Tolerance> {
        self.tolerances.iter().find(|tolerance| &tolerance.id == id)
    }

    /// First tolerance whose name matches exactly.
    pub fn tolerance_named(&self, name: &str) -> Option<&Tolerance> {
        self.tolerances.iter().find(|tolerance| tolerance.name == name)
    }

    /// Committed value of every tolerance, keyed by id.
    pub fn committed_values(&self) -> BTreeMap<ToleranceId, f64> {
        self.tolerances
            .iter()
            .map(|tolerance| (tolerance.id.clone(), tolerance.value))
            .collect()
    }
}
