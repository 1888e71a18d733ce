//! Virtual folders shown in the sidebar

use serde::{Deserialize, Serialize};
use std::fmt;

/// An enumerated top-level grouping of notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    /// Every note that is neither trashed nor the scratchpad
    #[default]
    All,
    /// Notes marked as favorite
    Favorites,
    /// The scratchpad note
    Scratchpad,
    /// Trashed notes
    Trash,
    /// Notes of the active category
    Category,
}

/// Display names for every folder, in sidebar order
pub const FOLDER_MAP: [(Folder, &str); 5] = [
    (Folder::All, "All Notes"),
    (Folder::Favorites, "Favorites"),
    (Folder::Scratchpad, "Scratchpad"),
    (Folder::Trash, "Trash"),
    (Folder::Category, "Category"),
];

impl Folder {
    /// Human readable folder name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::All => "All Notes",
            Self::Favorites => "Favorites",
            Self::Scratchpad => "Scratchpad",
            Self::Trash => "Trash",
            Self::Category => "Category",
        }
    }

    /// Folders that appear as fixed links in the sidebar
    #[must_use]
    pub const fn sidebar_folders() -> [Self; 4] {
        [Self::All, Self::Favorites, Self::Scratchpad, Self::Trash]
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_map_matches_display_names() {
        for (folder, name) in FOLDER_MAP {
            assert_eq!(folder.display_name(), name);
        }
    }

    #[test]
    fn folder_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Folder::Favorites).unwrap(),
            "\"favorites\""
        );
        let parsed: Folder = serde_json::from_str("\"category\"").unwrap();
        assert_eq!(parsed, Folder::Category);
    }

    #[test]
    fn sidebar_folders_exclude_category_mode() {
        assert!(!Folder::sidebar_folders().contains(&Folder::Category));
    }
}
