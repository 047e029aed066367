//! In-memory backup of the live documents.
//!
//! A snapshot shares the documents it was taken from; it does not copy them.
//! That is enough because documents are only ever replaced wholesale (load,
//! reload, `replace_*`), never edited in place.

use crate::{Document, DurabilityConfig};
use log::{debug, warn};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub(crate) struct Snapshot {
    settings: Option<Arc<Document>>,
    materials: Option<Arc<Document>>,
}

impl DurabilityConfig {
    /// Back up (`apply = false`) or restore (`apply = true`) both documents.
    pub fn snapshot(&mut self, apply: bool) {
        if apply {
            self.restore();
        } else {
            self.backup();
        }
    }

    /// Remember the current documents, replacing any earlier snapshot.
    pub fn backup(&mut self) {
        debug!(
            "snapshotting documents (settings={}, materials={})",
            self.settings.is_some(),
            self.materials.is_some()
        );
        self.snapshot = Some(Snapshot {
            settings: self.settings.clone(),
            materials: self.materials.clone(),
        });
    }

    /// Put the snapshotted documents back. The snapshot is kept, so restoring
    /// twice yields the same documents. Returns `false` when no snapshot was
    /// ever taken; the live documents are left alone in that case.
    pub fn restore(&mut self) -> bool {
        let Some(snapshot) = self.snapshot.as_ref() else {
            warn!("restore requested without a snapshot; keeping live documents");
            return false;
        };
        self.settings = snapshot.settings.clone();
        self.materials = snapshot.materials.clone();
        debug!("restored documents from snapshot");
        true
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}
