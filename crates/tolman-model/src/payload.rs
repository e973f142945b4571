//! Wire shapes for the deferred batch submission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::{ItemId, ToleranceId};

/// One item's contribution to the outbound submission: the final value of
/// every tolerance that changed since the last submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEntry {
    pub part_id: ItemId,
    pub changed_tolerances: BTreeMap<ToleranceId, f64>,
}

/// The batch handed to the transport collaborator, one entry per item with
/// at least one recorded change. Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    pub entries: Vec<SubmissionEntry>,
}

impl SubmissionPayload {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
