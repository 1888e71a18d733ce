//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use takenote_core::filter::visible_notes;
use takenote_core::models::{Category, CategoryId, Folder, Note, NoteId, Settings, SyncPayload};
use takenote_core::services::DatabaseService;
use takenote_core::shell::ShellState;
use takenote_core::state::SyncStatus;

use crate::theme::{palette, ColorPalette};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// All notes loaded in the app
    pub notes: Signal<Vec<Note>>,
    /// All categories, in sidebar order
    pub categories: Signal<Vec<Category>>,
    /// Selected folder
    pub active_folder: Signal<Folder>,
    /// Selected category, meaningful in the category folder
    pub active_category_id: Signal<Option<CategoryId>>,
    /// Note open in the editor
    pub active_note_id: Signal<Option<NoteId>>,
    /// Current search query
    pub search_query: Signal<String>,
    /// Application settings
    pub settings: Signal<Settings>,
    /// Whether the settings modal is open
    pub settings_open: Signal<bool>,
    /// Outcome of the last sync
    pub sync_status: Signal<SyncStatus>,
    /// Database service, set once the store has opened it
    pub db_service: Signal<Option<DatabaseService>>,
    /// True until the first notes load completes
    pub loading: Signal<bool>,
}

impl AppState {
    /// Create every signal in the current scope
    pub fn new() -> Self {
        Self {
            notes: Signal::new(Vec::new()),
            categories: Signal::new(Vec::new()),
            active_folder: Signal::new(Folder::default()),
            active_category_id: Signal::new(None),
            active_note_id: Signal::new(None),
            search_query: Signal::new(String::new()),
            settings: Signal::new(Settings::default()),
            settings_open: Signal::new(false),
            sync_status: Signal::new(SyncStatus::default()),
            db_service: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn dark(&self) -> bool {
        self.settings.read().dark_theme
    }

    pub fn colors(&self) -> &'static ColorPalette {
        palette(self.dark())
    }

    /// Snapshot of the slices the shell renders from
    pub fn shell_state(&self) -> ShellState {
        ShellState {
            dark: self.dark(),
            active_folder: *self.active_folder.read(),
            active_category_id: self.active_category_id.read().clone(),
            notes: self.notes.read().clone(),
            categories: self.categories.read().clone(),
        }
    }

    /// Snapshot of the collections to persist, read without subscribing
    pub fn sync_payload(&self) -> SyncPayload {
        SyncPayload {
            notes: self.notes.peek().clone(),
            categories: self.categories.peek().clone(),
        }
    }

    /// Get the note open in the editor
    pub fn active_note(&self) -> Option<Note> {
        let active_id = (self.active_note_id)()?;
        self.notes.read().iter().find(|note| note.id == active_id).cloned()
    }

    /// Notes of the selected folder, searched and sorted
    pub fn visible_notes(&self) -> Vec<Note> {
        let notes = self.notes.read();
        let active_category_id = self.active_category_id.read();
        visible_notes(
            &notes,
            *self.active_folder.read(),
            active_category_id.as_ref(),
            &self.search_query.read(),
            self.settings.read().notes_sort,
        )
        .into_iter()
        .cloned()
        .collect()
    }

    pub fn select_folder(&mut self, folder: Folder) {
        self.active_folder.set(folder);
        self.active_category_id.set(None);
        self.select_first_visible();
    }

    pub fn select_category(&mut self, id: CategoryId) {
        self.active_folder.set(Folder::Category);
        self.active_category_id.set(Some(id));
        self.select_first_visible();
    }

    /// Open the first note of the current list, or nothing
    pub fn select_first_visible(&mut self) {
        let first = self.visible_notes().first().map(|note| note.id);
        self.active_note_id.set(first);
    }

    /// Add an empty note to the selected folder and open it
    pub fn create_note(&mut self) {
        let folder = *self.active_folder.peek();
        let category = self.active_category_id.peek().clone();
        let (note, folder) = new_note_for(folder, category);
        tracing::info!("Created new note: {}", note.id);

        self.active_folder.set(folder);
        self.active_category_id.set(note.category.clone());
        self.active_note_id.set(Some(note.id));
        self.notes.write().insert(0, note);
    }

    /// Apply `edit` to the note with `id`, bumping its update time
    pub fn update_note(&mut self, id: NoteId, edit: impl FnOnce(&mut Note)) {
        let mut notes = self.notes.write();
        if let Some(note) = notes.iter_mut().find(|note| note.id == id) {
            edit(note);
            note.touch();
        }
    }

    /// Move the open note to or out of the trash
    pub fn toggle_trash_active(&mut self) {
        let Some(id) = *self.active_note_id.peek() else {
            return;
        };
        self.update_note(id, |note| note.trash = !note.trash);
        self.select_first_visible();
    }

    pub fn add_category(&mut self, name: &str) -> Option<CategoryId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let category = Category::new(name);
        let id = category.id.clone();
        self.categories.write().push(category);
        Some(id)
    }

    pub fn rename_category(&mut self, id: &CategoryId, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(category) = self.categories.write().iter_mut().find(|c| &c.id == id) {
            category.name = name.to_string();
        }
    }

    /// Remove a category and unfile its notes
    pub fn delete_category(&mut self, id: &CategoryId) {
        self.categories.write().retain(|category| &category.id != id);
        let mut notes = self.notes.write();
        for note in notes.iter_mut().filter(|note| note.category.as_ref() == Some(id)) {
            note.category = None;
            note.touch();
        }
        drop(notes);

        if self.active_category_id.peek().as_ref() == Some(id) {
            self.select_folder(Folder::All);
        }
    }

    /// Replace settings and persist them in the background
    pub fn update_settings(&mut self, edit: impl FnOnce(&mut Settings)) {
        let mut next = self.settings.peek().clone();
        edit(&mut next);
        self.settings.set(next.clone());

        let db = self.db_service.peek().clone();
        spawn(async move {
            if let Some(db) = db {
                if let Err(e) = db.save_settings(&next).await {
                    tracing::error!("Failed to save settings: {}", e);
                }
            }
        });
    }
}

/// Note created from the given folder, and the folder to show it in.
///
/// Trash and scratchpad hold no new notes, so those fall back to all notes.
/// The note's category is the category to select afterwards.
fn new_note_for(folder: Folder, category: Option<CategoryId>) -> (Note, Folder) {
    let mut note = Note::new("");
    let folder = match folder {
        Folder::Favorites => {
            note.favorite = true;
            folder
        }
        Folder::Category if category.is_some() => {
            note.category = category;
            folder
        }
        Folder::All | Folder::Scratchpad | Folder::Trash | Folder::Category => Folder::All,
    };
    (note, folder)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_note_joins_active_category() {
        let work = CategoryId::from("work");
        let (note, folder) = new_note_for(Folder::Category, Some(work.clone()));
        assert_eq!(folder, Folder::Category);
        assert_eq!(note.category, Some(work));
        assert!(note.is_empty());
    }

    #[test]
    fn new_note_in_favorites_is_favorite() {
        let (note, folder) = new_note_for(Folder::Favorites, None);
        assert_eq!(folder, Folder::Favorites);
        assert!(note.favorite);
    }

    #[test]
    fn new_note_leaves_trash_and_scratchpad() {
        for from in [Folder::Trash, Folder::Scratchpad, Folder::Category] {
            let (note, folder) = new_note_for(from, None);
            assert_eq!(folder, Folder::All, "{from}");
            assert!(!note.trash);
            assert!(!note.scratchpad);
            assert!(note.category.is_none());
        }
    }

    #[test]
    fn new_note_category_is_set_only_in_category_folder() {
        let work = CategoryId::from("work");
        for from in [
            Folder::All,
            Folder::Favorites,
            Folder::Scratchpad,
            Folder::Trash,
            Folder::Category,
        ] {
            for category in [None, Some(work.clone())] {
                let (note, folder) = new_note_for(from, category);
                assert_eq!(note.category.is_some(), folder == Folder::Category, "{from}");
            }
        }
    }
}
