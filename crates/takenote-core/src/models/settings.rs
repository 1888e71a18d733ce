//! Application settings model

use serde::{Deserialize, Serialize};

/// Sort order of the note list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotesSortKey {
    /// Most recently updated first
    #[default]
    LastUpdated,
    /// Alphabetical by title
    Title,
    /// Most recently created first
    CreatedDate,
}

impl NotesSortKey {
    /// All sort keys, in settings menu order
    pub const ALL: [Self; 3] = [Self::LastUpdated, Self::Title, Self::CreatedDate];

    /// Label shown in the settings modal
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LastUpdated => "Last updated",
            Self::Title => "Title",
            Self::CreatedDate => "Date created",
        }
    }

    /// Stable key used for persistence
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::LastUpdated => "last_updated",
            Self::Title => "title",
            Self::CreatedDate => "created_date",
        }
    }

    /// Parse a persisted key, falling back to the default
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_key() == key.trim())
            .unwrap_or_default()
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Dark theme enabled
    pub dark_theme: bool,
    /// Render the editor content as markdown preview
    pub preview_markdown: bool,
    /// Sidebar shown
    pub sidebar_visible: bool,
    /// Note list order
    pub notes_sort: NotesSortKey,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            preview_markdown: false,
            sidebar_visible: true,
            notes_sort: NotesSortKey::LastUpdated,
        }
    }
}
