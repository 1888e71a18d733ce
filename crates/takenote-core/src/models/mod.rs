//! Data models for TakeNote

mod category;
mod folder;
mod note;
mod settings;

use serde::{Deserialize, Serialize};

pub use category::{Category, CategoryId};
pub use folder::{Folder, FOLDER_MAP};
pub use note::{Note, NoteId, UNTITLED_NOTE};
pub use settings::{NotesSortKey, Settings};

/// Snapshot of the collections pushed by a sync request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// Every note currently held in memory
    pub notes: Vec<Note>,
    /// Every category currently held in memory
    pub categories: Vec<Category>,
}
