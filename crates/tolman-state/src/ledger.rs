//! Accumulator for applied, not-yet-submitted changes.

use std::collections::BTreeMap;

use tolman_model::{ItemId, SubmissionEntry, SubmissionPayload, ToleranceId};
use tracing::debug;

/// Cumulative diff since the last submit: item id to tolerance id to the
/// latest applied value.
///
/// The ledger keeps no history. Recording the same pair twice keeps only
/// the later value, and a submit resets the whole map at once.
#[derive(Debug, Clone, Default)]
pub struct ChangeLedger {
    changes: BTreeMap<ItemId, BTreeMap<ToleranceId, f64>>,
}

impl ChangeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the final value of one tolerance, overwriting any value this
    /// (item, tolerance) pair already carried.
    pub fn record(&mut self, item_id: &ItemId, tolerance_id: &ToleranceId, value: f64) {
        debug!(item_id = %item_id, tolerance_id = %tolerance_id, value, "recording change");
        self.changes
            .entry(item_id.clone())
            .or_default()
            .insert(tolerance_id.clone(), value);
    }

    /// Everything recorded so far, in id order. Clearing after a drain is
    /// the caller's separate step.
    pub fn changes(&self) -> &BTreeMap<ItemId, BTreeMap<ToleranceId, f64>> {
        &self.changes
    }

    /// Recorded changes for one item.
    pub fn item_changes(&self, item_id: &ItemId) -> Option<&BTreeMap<ToleranceId, f64>> {
        self.changes.get(item_id)
    }

    /// Number of distinct items with at least one recorded change.
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Build the outbound payload, one entry per changed item in ledger
    /// order. Reading does not consume the ledger.
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            entries: self
                .changes
                .iter()
                .map(|(item_id, changed)| SubmissionEntry {
                    part_id: item_id.clone(),
                    changed_tolerances: changed.clone(),
                })
                .collect(),
        }
    }

    /// Drop everything recorded, unconditionally.
    pub fn clear(&mut self) {
        self.changes.clear();
    }
}
