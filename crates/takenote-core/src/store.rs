//! Seams between the shell and the application store.
//!
//! The shell never touches the store directly: it reads a [`StateSource`]
//! and issues requests through a [`Dispatch`] implementation.

use std::sync::Arc;

use crate::models::SyncPayload;

/// Write side of the store as seen by the shell.
///
/// Every request is fire-and-forget. Failures are the handler's concern.
pub trait Dispatch {
    /// Load notes from the backing store
    fn load_notes(&self);

    /// Load categories from the backing store
    fn load_categories(&self);

    /// Push the given notes and categories to the sync handler
    fn sync_state(&self, payload: SyncPayload);
}

impl<D: Dispatch + ?Sized> Dispatch for Arc<D> {
    fn load_notes(&self) {
        (**self).load_notes();
    }

    fn load_categories(&self) {
        (**self).load_categories();
    }

    fn sync_state(&self, payload: SyncPayload) {
        (**self).sync_state(payload);
    }
}

/// Read side used by the periodic sync: returns the collections current at
/// the moment of the call.
pub trait StateSource {
    fn sync_payload(&self) -> SyncPayload;
}

impl<F> StateSource for F
where
    F: Fn() -> SyncPayload,
{
    fn sync_payload(&self) -> SyncPayload {
        self()
    }
}

/// Message form of the three store requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCommand {
    LoadNotes,
    LoadCategories,
    SyncState(SyncPayload),
}

impl StoreCommand {
    /// Short name used in logs
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadNotes => "loadNotes",
            Self::LoadCategories => "loadCategories",
            Self::SyncState(_) => "syncState",
        }
    }
}
