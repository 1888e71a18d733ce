//! Database service handling the store's load and sync requests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::db::{
    CategoryRepository, Database, LibSqlCategoryRepository, LibSqlNoteRepository,
    LibSqlSettingsRepository, NoteRepository, SettingsRepository,
};
use crate::models::{Category, Note, Settings, SyncPayload};
use crate::store::StoreCommand;
use crate::util::unix_millis_now;
use crate::{Error, Result};

/// Text of the note created on first launch
pub const WELCOME_NOTE: &str = "# Welcome to TakeNote!\n\n\
TakeNote is a plain-text notes app.\n\n\
- Notes are saved automatically every 20 seconds.\n\
- Press Ctrl+Alt+N for a new note and Ctrl+Alt+L to sync right away.\n\
- Use categories in the sidebar to keep related notes together.\n";

/// Text of the scratchpad created on first launch
pub const SCRATCHPAD_NOTE: &str = "# Scratchpad\n\nThe easiest note to find.";

/// Summary of a completed sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub notes: usize,
    pub categories: usize,
    /// Completion time (unix ms)
    pub synced_at: i64,
}

/// Result of handling a [`StoreCommand`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    NotesLoaded(Vec<Note>),
    CategoriesLoaded(Vec<Category>),
    Synced(SyncReport),
}

/// Collections read back successfully at least once
#[derive(Debug, Default)]
struct LoadState {
    notes: AtomicBool,
    categories: AtomicBool,
}

/// Thread-safe service for DB and repository operations.
#[derive(Clone)]
pub struct DatabaseService {
    db: Arc<Mutex<Database>>,
    db_path: Option<PathBuf>,
    loaded: Arc<LoadState>,
}

impl DatabaseService {
    /// Open a database service at the given filesystem path.
    pub async fn open_path(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        tracing::info!("Opening database at {}", db_path.display());
        let db = Database::open(&db_path).await?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            db_path: Some(db_path),
            loaded: Arc::default(),
        })
    }

    /// Open an in-memory database service (primarily for tests).
    pub async fn open_in_memory() -> Result<Self> {
        let db = Database::open_in_memory().await?;
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            db_path: None,
            loaded: Arc::default(),
        })
    }

    /// Path of the backing file, `None` for in-memory databases.
    pub fn db_path(&self) -> Option<&PathBuf> {
        self.db_path.as_ref()
    }

    /// Whether both notes and categories have loaded successfully.
    ///
    /// Syncs are refused until then: the in-memory collections a sync
    /// carries would otherwise replace rows that were never read.
    pub fn is_loaded(&self) -> bool {
        self.loaded.notes.load(Ordering::Acquire) && self.loaded.categories.load(Ordering::Acquire)
    }

    /// Handle one store request.
    pub async fn handle(&self, command: StoreCommand) -> Result<StoreEvent> {
        match command {
            StoreCommand::LoadNotes => self.load_notes().await.map(StoreEvent::NotesLoaded),
            StoreCommand::LoadCategories => self
                .load_categories()
                .await
                .map(StoreEvent::CategoriesLoaded),
            StoreCommand::SyncState(payload) => {
                self.sync_state(&payload).await.map(StoreEvent::Synced)
            }
        }
    }

    /// Load every note.
    ///
    /// The first load of a fresh database seeds a welcome note and the
    /// scratchpad.
    pub async fn load_notes(&self) -> Result<Vec<Note>> {
        let db = self.db.lock().await;
        let conn = db.connection();
        let repo = LibSqlNoteRepository::new(conn);
        let settings = LibSqlSettingsRepository::new(conn);

        let notes = repo.list().await?;
        if !notes.is_empty() || settings.is_seeded().await? {
            tracing::info!("Loaded {} notes", notes.len());
            self.loaded.notes.store(true, Ordering::Release);
            return Ok(notes);
        }

        let seeded = vec![Note::new(WELCOME_NOTE), Note::new_scratchpad(SCRATCHPAD_NOTE)];
        repo.replace_all(&seeded).await?;
        settings.mark_seeded().await?;
        tracing::info!("Seeded first-launch notes");
        self.loaded.notes.store(true, Ordering::Release);
        Ok(seeded)
    }

    /// Load every category in saved order.
    pub async fn load_categories(&self) -> Result<Vec<Category>> {
        let db = self.db.lock().await;
        let repo = LibSqlCategoryRepository::new(db.connection());
        let categories = repo.list().await?;
        tracing::info!("Loaded {} categories", categories.len());
        self.loaded.categories.store(true, Ordering::Release);
        Ok(categories)
    }

    /// Persist the snapshot, replacing the stored notes and categories.
    ///
    /// Both collections are written in one transaction. Concurrent calls are
    /// serialized and the last snapshot wins. Fails with
    /// [`Error::NotLoaded`] until [`Self::is_loaded`] holds.
    pub async fn sync_state(&self, payload: &SyncPayload) -> Result<SyncReport> {
        if !self.is_loaded() {
            tracing::warn!("Refusing to sync before notes and categories have loaded");
            return Err(Error::NotLoaded(
                "notes and categories must load before a sync".to_string(),
            ));
        }

        let db = self.db.lock().await;
        let conn = db.connection();

        conn.execute("BEGIN TRANSACTION", ()).await?;
        let written = async {
            LibSqlNoteRepository::new(conn)
                .replace_all(&payload.notes)
                .await?;
            LibSqlCategoryRepository::new(conn)
                .replace_all(&payload.categories)
                .await
        }
        .await;

        if let Err(error) = written {
            conn.execute("ROLLBACK", ()).await.ok();
            return Err(error);
        }
        if let Err(error) = conn.execute("COMMIT", ()).await {
            conn.execute("ROLLBACK", ()).await.ok();
            return Err(error.into());
        }

        let report = SyncReport {
            notes: payload.notes.len(),
            categories: payload.categories.len(),
            synced_at: unix_millis_now(),
        };
        tracing::debug!(
            notes = report.notes,
            categories = report.categories,
            "Synced state"
        );
        Ok(report)
    }

    /// Load settings.
    pub async fn load_settings(&self) -> Result<Settings> {
        let db = self.db.lock().await;
        let repo = LibSqlSettingsRepository::new(db.connection());
        repo.load().await
    }

    /// Save settings.
    pub async fn save_settings(&self, settings: &Settings) -> Result<()> {
        let db = self.db.lock().await;
        let repo = LibSqlSettingsRepository::new(db.connection());
        repo.save(settings).await
    }
}
