//! Store coroutine executing load and sync requests against the database

use std::path::PathBuf;

use dioxus::prelude::*;
use futures_util::StreamExt;

use takenote_core::services::{DatabaseService, StoreEvent};
use takenote_core::state::SyncStatus;
use takenote_core::store::{Dispatch, StoreCommand};
use takenote_core::{Result, SyncPayload};

use crate::state::AppState;

/// [`Dispatch`] that hands requests to the store coroutine
#[derive(Clone, Copy)]
pub struct CoroutineDispatch(Coroutine<StoreCommand>);

impl CoroutineDispatch {
    pub const fn new(store: Coroutine<StoreCommand>) -> Self {
        Self(store)
    }
}

impl Dispatch for CoroutineDispatch {
    fn load_notes(&self) {
        self.0.send(StoreCommand::LoadNotes);
    }

    fn load_categories(&self) {
        self.0.send(StoreCommand::LoadCategories);
    }

    fn sync_state(&self, payload: SyncPayload) {
        self.0.send(StoreCommand::SyncState(payload));
    }
}

/// Status shown when a sync is skipped because a load has not succeeded
const NOT_LOADED: &str = "notes did not load, changes are not being saved";

/// How the store handles one command
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Run(StoreCommand),
    Skip,
}

/// Decide how to handle `command`.
///
/// Syncs are skipped until both collections have loaded. Otherwise a sync
/// writes the collections current when it is handled: a tick that fired
/// while the database was still opening carries a snapshot from before the
/// loads.
fn plan(command: StoreCommand, loaded: bool, current: impl FnOnce() -> SyncPayload) -> Step {
    match command {
        StoreCommand::SyncState(_) if !loaded => Step::Skip,
        StoreCommand::SyncState(_) => Step::Run(StoreCommand::SyncState(current())),
        other => Step::Run(other),
    }
}

/// Status after a skipped sync. An earlier error stays visible.
fn status_when_skipped(current: &SyncStatus) -> SyncStatus {
    match current {
        SyncStatus::Error(_) => current.clone(),
        _ => SyncStatus::Error(NOT_LOADED.to_string()),
    }
}

/// Status after a handled command, if it changes
fn status_after(result: &Result<StoreEvent>) -> Option<SyncStatus> {
    match result {
        Ok(StoreEvent::Synced(report)) => Some(SyncStatus::Synced {
            at: report.synced_at,
        }),
        Ok(StoreEvent::NotesLoaded(_) | StoreEvent::CategoriesLoaded(_)) => None,
        Err(e) => Some(SyncStatus::Error(e.to_string())),
    }
}

/// Whether the "Loading notes" placeholder is done after `result`
const fn ends_loading(result: &Result<StoreEvent>) -> bool {
    matches!(result, Ok(StoreEvent::NotesLoaded(_)) | Err(_))
}

/// Open the database and run commands one at a time until the channel closes.
///
/// Requests sent before the database is open wait in the channel.
pub async fn run_store(
    mut commands: UnboundedReceiver<StoreCommand>,
    mut state: AppState,
    db_path: PathBuf,
) {
    let db = match DatabaseService::open_path(db_path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            state.sync_status.set(SyncStatus::Error(e.to_string()));
            state.loading.set(false);
            return;
        }
    };

    match db.load_settings().await {
        Ok(settings) => state.settings.set(settings),
        Err(e) => tracing::warn!("Failed to load settings, using defaults: {}", e),
    }
    state.db_service.set(Some(db.clone()));

    while let Some(command) = commands.next().await {
        let name = command.name();
        let command = match plan(command, db.is_loaded(), || state.sync_payload()) {
            Step::Run(command) => command,
            Step::Skip => {
                tracing::warn!("Skipping {name}: notes and categories have not loaded");
                let status = status_when_skipped(&state.sync_status.peek());
                state.sync_status.set(status);
                continue;
            }
        };

        tracing::debug!("Handling {name}");
        if matches!(command, StoreCommand::SyncState(_)) {
            state.sync_status.set(SyncStatus::Syncing);
        }

        let result = db.handle(command).await;
        if let Err(e) = &result {
            tracing::error!("{name} failed: {}", e);
        }
        if let Some(status) = status_after(&result) {
            state.sync_status.set(status);
        }
        if ends_loading(&result) {
            state.loading.set(false);
        }
        if let Ok(event) = result {
            apply_event(&mut state, event);
        }
    }
    tracing::debug!("Store channel closed");
}

fn apply_event(state: &mut AppState, event: StoreEvent) {
    match event {
        StoreEvent::NotesLoaded(notes) => {
            state.notes.set(notes);
            if state.active_note_id.peek().is_none() {
                state.select_first_visible();
            }
        }
        StoreEvent::CategoriesLoaded(categories) => state.categories.set(categories),
        StoreEvent::Synced(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use takenote_core::services::SyncReport;
    use takenote_core::{Error, Note};

    use super::*;

    fn current() -> SyncPayload {
        SyncPayload {
            notes: vec![Note::new("current")],
            categories: Vec::new(),
        }
    }

    #[test]
    fn loads_run_unchanged() {
        for command in [StoreCommand::LoadNotes, StoreCommand::LoadCategories] {
            for loaded in [false, true] {
                assert_eq!(
                    plan(command.clone(), loaded, current),
                    Step::Run(command.clone())
                );
            }
        }
    }

    #[test]
    fn sync_is_skipped_until_loaded() {
        let step = plan(
            StoreCommand::SyncState(SyncPayload::default()),
            false,
            || panic!("state must not be read for a skipped sync"),
        );
        assert_eq!(step, Step::Skip);
    }

    #[test]
    fn sync_writes_state_current_when_handled() {
        let queued_before_loads = StoreCommand::SyncState(SyncPayload::default());
        let Step::Run(StoreCommand::SyncState(payload)) = plan(queued_before_loads, true, current)
        else {
            panic!("sync should run once loaded");
        };
        assert_eq!(payload.notes.len(), 1);
        assert_eq!(payload.notes[0].text, "current");
    }

    #[test]
    fn skipped_sync_keeps_earlier_error() {
        let load_error = SyncStatus::Error("Invalid input: Invalid note id: x".to_string());
        assert_eq!(status_when_skipped(&load_error), load_error);
        assert_eq!(
            status_when_skipped(&SyncStatus::Idle),
            SyncStatus::Error(NOT_LOADED.to_string())
        );
    }

    #[test]
    fn status_follows_results() {
        let synced = Ok(StoreEvent::Synced(SyncReport {
            notes: 1,
            categories: 0,
            synced_at: 42,
        }));
        assert_eq!(status_after(&synced), Some(SyncStatus::Synced { at: 42 }));
        assert_eq!(status_after(&Ok(StoreEvent::CategoriesLoaded(Vec::new()))), None);

        let failed = Err(Error::NotLoaded("categories".to_string()));
        assert_eq!(
            status_after(&failed),
            Some(SyncStatus::Error("Not loaded: categories".to_string()))
        );
    }

    #[test]
    fn loading_ends_on_notes_or_any_failure() {
        assert!(ends_loading(&Ok(StoreEvent::NotesLoaded(Vec::new()))));
        assert!(ends_loading(&Err(Error::InvalidInput("bad row".to_string()))));
        assert!(!ends_loading(&Ok(StoreEvent::CategoriesLoaded(Vec::new()))));
    }
}
