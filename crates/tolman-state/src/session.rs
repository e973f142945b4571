//! One in-flight edit of a single item.

use std::collections::BTreeMap;

use tolman_model::{Item, ItemId, Tolerance, ToleranceId, ValidationError};
use tolman_validate::{effective_value, validate};

use crate::error::SessionError;
use crate::ledger::ChangeLedger;
use crate::store::ItemStore;

/// Summary of a successful apply.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedEdit {
    pub item_id: ItemId,
    /// Tolerances whose final value differs from the value at session
    /// start, in the item's tolerance order.
    pub changed: Vec<(ToleranceId, f64)>,
}

/// Transient staging area for candidate edits to one item, with live
/// validation.
///
/// The session snapshots the item at open. Candidates start out equal to
/// the committed values; every write replaces one candidate and recomputes
/// the full error set from scratch, so `errors` never reflects a stale
/// candidate map. The session holds no store or ledger reference; apply
/// borrows both explicitly.
#[derive(Debug, Clone)]
pub struct EditSession {
    item: Item,
    original_values: BTreeMap<ToleranceId, f64>,
    candidate_values: BTreeMap<ToleranceId, f64>,
    errors: Vec<ValidationError>,
}

impl EditSession {
    /// Open a session on an item, snapshotting its committed values.
    pub fn open(item: &Item) -> Self {
        let committed = item.committed_values();
        Self {
            item: item.clone(),
            original_values: committed.clone(),
            candidate_values: committed,
            errors: Vec::new(),
        }
    }

    #[inline]
    pub fn item_id(&self) -> &ItemId {
        &self.item.id
    }

    /// The item snapshot the session was opened on.
    #[inline]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Stage a candidate value and synchronously revalidate.
    ///
    /// Ids matching no tolerance of the item are staged but inert: the
    /// engine ignores them and they never show up in the final values.
    pub fn set_value(&mut self, tolerance_id: &ToleranceId, value: f64) -> &[ValidationError] {
        self.candidate_values.insert(tolerance_id.clone(), value);
        self.errors = validate(&self.item, &self.candidate_values);
        &self.errors
    }

    /// Current error set, in validation order.
    #[inline]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// First error attached to one tolerance, for inline rendering.
    pub fn error_for(&self, tolerance_id: &ToleranceId) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|error| error.tolerance_id() == tolerance_id)
    }

    /// True when no errors block an apply.
    #[inline]
    pub fn can_apply(&self) -> bool {
        self.errors.is_empty()
    }

    /// True when applying now would change at least one value.
    pub fn is_dirty(&self) -> bool {
        !self.changed_values().is_empty()
    }

    /// Candidate value each tolerance currently holds in this session.
    pub fn candidate_value(&self, tolerance_id: &ToleranceId) -> Option<f64> {
        self.candidate_values.get(tolerance_id).copied()
    }

    /// The tolerance list as it would be committed: candidate values merged
    /// over the snapshot, ids, names and bounds untouched.
    pub fn final_tolerances(&self) -> Vec<Tolerance> {
        self.item
            .tolerances
            .iter()
            .map(|tolerance| {
                tolerance.with_value(effective_value(tolerance, &self.candidate_values))
            })
            .collect()
    }

    /// Tolerances whose final value differs from the value at session
    /// start, in the item's tolerance order.
    pub fn changed_values(&self) -> Vec<(ToleranceId, f64)> {
        self.item
            .tolerances
            .iter()
            .filter_map(|tolerance| {
                let final_value = effective_value(tolerance, &self.candidate_values);
                match self.original_values.get(&tolerance.id) {
                    Some(original) if *original == final_value => None,
                    _ => Some((tolerance.id.clone(), final_value)),
                }
            })
            .collect()
    }

    /// Commit the session into the store and ledger.
    ///
    /// Guarded: with errors outstanding, neither the store nor the ledger
    /// is touched, even when called directly rather than through an
    /// affordance that was supposed to be disabled. All checks precede the
    /// first mutation. Closing the session afterwards is the caller's step.
    pub fn apply(
        &self,
        store: &mut ItemStore,
        ledger: &mut ChangeLedger,
    ) -> Result<AppliedEdit, SessionError> {
        if !self.errors.is_empty() {
            return Err(SessionError::ValidationOutstanding {
                count: self.errors.len(),
            });
        }

        let changed = self.changed_values();
        if !store.replace_tolerances(&self.item.id, self.final_tolerances()) {
            // Reachable only if the session outlived its store.
            return Err(SessionError::UnknownItem {
                item_id: self.item.id.clone(),
            });
        }
        for (tolerance_id, value) in &changed {
            ledger.record(&self.item.id, tolerance_id, *value);
        }

        Ok(AppliedEdit {
            item_id: self.item.id.clone(),
            changed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tolerance(id: &str, name: &str, value: f64, floor: f64, ceiling: f64) -> Tolerance {
        Tolerance {
            id: ToleranceId::new(id),
            name: name.to_string(),
            value,
            floor,
            ceiling,
        }
    }

    fn seed_item() -> Item {
        Item {
            id: ItemId::new("1"),
            label: "Item 1".to_string(),
            tolerances: vec![
                make_tolerance("1-1", "Tolerance A", 5.0, 0.0, 10.0),
                make_tolerance("1-2", "Tolerance B", 8.0, 0.0, 15.0),
            ],
        }
    }

    #[test]
    fn test_open_snapshots_committed_values() {
        let session = EditSession::open(&seed_item());
        assert!(session.errors().is_empty());
        assert!(session.can_apply());
        assert!(!session.is_dirty());
        assert_eq!(session.candidate_value(&ToleranceId::new("1-1")), Some(5.0));
    }

    #[test]
    fn test_set_value_replaces_the_whole_error_set() {
        let mut session = EditSession::open(&seed_item());

        let errors = session.set_value(&ToleranceId::new("1-1"), 9.0);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message(),
            "Tolerance A cannot be greater than Tolerance B"
        );
        assert!(session.error_for(&ToleranceId::new("1-1")).is_some());
        assert!(session.error_for(&ToleranceId::new("1-2")).is_none());
        assert!(!session.can_apply());

        let errors = session.set_value(&ToleranceId::new("1-1"), 6.0);
        assert!(errors.is_empty());
        assert!(session.can_apply());
    }

    #[test]
    fn test_apply_with_errors_leaves_everything_untouched() {
        let mut store = ItemStore::new(vec![seed_item()]);
        let mut ledger = ChangeLedger::new();
        let mut session = EditSession::open(&seed_item());

        session.set_value(&ToleranceId::new("1-1"), 12.0);
        let result = session.apply(&mut store, &mut ledger);
        assert_eq!(
            result,
            Err(SessionError::ValidationOutstanding { count: 2 })
        );

        let item = store.get(&ItemId::new("1")).expect("item");
        assert_eq!(item.tolerances[0].value, 5.0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_apply_records_only_values_that_changed() {
        let mut store = ItemStore::new(vec![seed_item()]);
        let mut ledger = ChangeLedger::new();
        let mut session = EditSession::open(&seed_item());

        session.set_value(&ToleranceId::new("1-1"), 6.0);
        let applied = session.apply(&mut store, &mut ledger).expect("apply");

        assert_eq!(applied.item_id.as_str(), "1");
        assert_eq!(applied.changed, vec![(ToleranceId::new("1-1"), 6.0)]);

        let item = store.get(&ItemId::new("1")).expect("item");
        assert_eq!(item.tolerances[0].value, 6.0);
        assert_eq!(item.tolerances[1].value, 8.0);

        let changes = ledger.item_changes(&ItemId::new("1")).expect("entry");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.get(&ToleranceId::new("1-1")), Some(&6.0));
    }

    #[test]
    fn test_edit_back_to_original_is_not_a_change() {
        let mut store = ItemStore::new(vec![seed_item()]);
        let mut ledger = ChangeLedger::new();
        let mut session = EditSession::open(&seed_item());

        session.set_value(&ToleranceId::new("1-1"), 6.0);
        assert!(session.is_dirty());
        session.set_value(&ToleranceId::new("1-1"), 5.0);
        assert!(!session.is_dirty());

        let applied = session.apply(&mut store, &mut ledger).expect("apply");
        assert!(applied.changed.is_empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_unknown_tolerance_ids_are_inert() {
        let mut session = EditSession::open(&seed_item());
        let errors = session.set_value(&ToleranceId::new("9-9"), 999.0);
        assert!(errors.is_empty());
        assert!(!session.is_dirty());
        assert!(
            session
                .final_tolerances()
                .iter()
                .all(|tolerance| tolerance.id.as_str() != "9-9")
        );
    }

    #[test]
    fn test_apply_fails_cleanly_when_store_lost_the_item() {
        let mut store = ItemStore::new(vec![]);
        let mut ledger = ChangeLedger::new();
        let mut session = EditSession::open(&seed_item());
        session.set_value(&ToleranceId::new("1-1"), 6.0);

        let result = session.apply(&mut store, &mut ledger);
        assert_eq!(
            result,
            Err(SessionError::UnknownItem {
                item_id: ItemId::new("1"),
            })
        );
        assert!(ledger.is_empty());
    }
}
