//! Root state owning the store, the ledger, and the active session.

use tolman_model::{Item, ItemId, SubmissionPayload, ToleranceId, ValidationError};
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::ledger::ChangeLedger;
use crate::session::{AppliedEdit, EditSession};
use crate::store::ItemStore;

/// Top-level state for one editing surface.
///
/// At most one session is open at a time; opening another discards the
/// first (last-open-wins, no merge). Every operation is synchronous and
/// runs to completion before the next one is handled.
#[derive(Debug, Clone, Default)]
pub struct Workbench {
    store: ItemStore,
    ledger: ChangeLedger,
    session: Option<EditSession>,
}

impl Workbench {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            store: ItemStore::new(items),
            ledger: ChangeLedger::new(),
            session: None,
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    #[inline]
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    #[inline]
    pub fn ledger(&self) -> &ChangeLedger {
        &self.ledger
    }

    /// The open session, if any.
    #[inline]
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Number of items with applied, unsubmitted changes. Gates the submit
    /// affordance.
    #[inline]
    pub fn pending_changes(&self) -> usize {
        self.ledger.len()
    }

    /// True when a session is open and error-free. Gates the apply
    /// affordance.
    pub fn can_apply(&self) -> bool {
        self.session.as_ref().is_some_and(EditSession::can_apply)
    }

    // ========================================================================
    // Session lifecycle
    // ========================================================================

    /// Open an edit session on an item, discarding any session already
    /// open. Uncommitted candidates of the discarded session are lost.
    pub fn open_session(&mut self, item_id: &ItemId) -> Result<(), SessionError> {
        let item = self
            .store
            .get(item_id)
            .ok_or_else(|| SessionError::UnknownItem {
                item_id: item_id.clone(),
            })?;
        let session = EditSession::open(item);

        if let Some(previous) = self.session.take()
            && previous.is_dirty()
        {
            warn!(item_id = %previous.item_id(), "discarding dirty edit session");
        }
        debug!(item_id = %item_id, "edit session opened");
        self.session = Some(session);
        Ok(())
    }

    /// Stage a candidate value on the open session; the fresh error set
    /// comes back.
    pub fn set_value(
        &mut self,
        tolerance_id: &ToleranceId,
        value: f64,
    ) -> Result<&[ValidationError], SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NoActiveSession)?;
        Ok(session.set_value(tolerance_id, value))
    }

    /// Drop the open session without touching store or ledger.
    ///
    /// Reports whether a session was open to drop.
    pub fn cancel_session(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                debug!(item_id = %session.item_id(), "edit session cancelled");
                true
            }
            None => false,
        }
    }

    /// Apply the open session into the store and ledger; on success the
    /// session closes. On failure it stays open with candidates intact.
    pub fn apply_session(&mut self) -> Result<AppliedEdit, SessionError> {
        let session = self.session.as_ref().ok_or(SessionError::NoActiveSession)?;
        let applied = session.apply(&mut self.store, &mut self.ledger)?;
        info!(
            item_id = %applied.item_id,
            changed = applied.changed.len(),
            "edit session applied"
        );
        self.session = None;
        Ok(applied)
    }

    // ========================================================================
    // Submit
    // ========================================================================

    /// Drain the ledger into an outbound payload and clear it.
    ///
    /// With nothing recorded this is a harmless no-op returning `None`.
    pub fn submit(&mut self) -> Option<SubmissionPayload> {
        if self.ledger.is_empty() {
            debug!("submit requested with no recorded changes");
            return None;
        }
        let payload = self.ledger.payload();
        self.ledger.clear();
        info!(items = payload.len(), "ledger drained for submission");
        Some(payload)
    }
}
