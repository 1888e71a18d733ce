//! Framework-free parts of the page shell.
//!
//! Everything the root component renders that depends on state is computed
//! here from an explicit [`ShellState`], so it can be checked without a UI.

use crate::models::{Category, CategoryId, Folder, Note};

/// Product name used in document titles
pub const APP_NAME: &str = "TakeNote";

/// Canonical link emitted into the document head
pub const CANONICAL_URL: &str = "https://takenote.dev";

/// Character set declared in the document head
pub const CHARSET: &str = "utf-8";

/// Class of the root element
pub const ROOT_CLASS: &str = "app";

/// Class of the root element in dark mode
pub const ROOT_CLASS_DARK: &str = "app dark";

/// Child regions of the page body, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRegion {
    Sidebar,
    NoteList,
    NoteEditor,
    KeyboardShortcuts,
    SettingsModal,
}

/// The fixed order in which the shell mounts its child regions
pub const CHILD_REGIONS: [ChildRegion; 5] = [
    ChildRegion::Sidebar,
    ChildRegion::NoteList,
    ChildRegion::NoteEditor,
    ChildRegion::KeyboardShortcuts,
    ChildRegion::SettingsModal,
];

/// Read-only snapshot of the state slices the shell selects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    pub dark: bool,
    pub active_folder: Folder,
    pub active_category_id: Option<CategoryId>,
    pub notes: Vec<Note>,
    pub categories: Vec<Category>,
}

impl ShellState {
    /// The active category, if the selected id still exists
    pub fn active_category(&self) -> Option<&Category> {
        resolve_active_category(&self.categories, self.active_category_id.as_ref())
    }

    /// Document title for this state
    pub fn title(&self) -> String {
        derive_title(self.active_folder, self.active_category())
    }

    /// Class of the root element for this state
    pub const fn root_class(&self) -> &'static str {
        root_class(self.dark)
    }
}

/// Find the category matching `active_category_id`.
///
/// A stale id (for example a deleted category) resolves to `None`.
pub fn resolve_active_category<'a>(
    categories: &'a [Category],
    active_category_id: Option<&CategoryId>,
) -> Option<&'a Category> {
    let id = active_category_id?;
    categories.iter().find(|category| &category.id == id)
}

/// Derive the document title from the folder selection.
pub fn derive_title(folder: Folder, active_category: Option<&Category>) -> String {
    match (folder, active_category) {
        (Folder::Category, Some(category)) => format!("{} | {APP_NAME}", category.name),
        (Folder::Category, None) => APP_NAME.to_string(),
        (folder, _) => format!("{} | {APP_NAME}", folder.display_name()),
    }
}

/// Class string of the root element; carries the `dark` modifier iff `dark`.
pub const fn root_class(dark: bool) -> &'static str {
    if dark {
        ROOT_CLASS_DARK
    } else {
        ROOT_CLASS
    }
}

/// Metadata emitted into the document head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHead {
    pub charset: &'static str,
    pub title: String,
    pub canonical_url: &'static str,
}

impl PageHead {
    /// Head metadata with the fixed charset and canonical link
    pub const fn new(title: String) -> Self {
        Self {
            charset: CHARSET,
            title,
            canonical_url: CANONICAL_URL,
        }
    }

    /// Build the head metadata for the given state
    pub fn from_state(state: &ShellState) -> Self {
        Self::new(state.title())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::FOLDER_MAP;

    fn work() -> Category {
        Category {
            id: CategoryId::from("work-1"),
            name: "Work".to_string(),
        }
    }

    #[test]
    fn title_for_plain_folders_uses_folder_map() {
        for (folder, name) in FOLDER_MAP {
            if folder == Folder::Category {
                continue;
            }
            assert_eq!(derive_title(folder, None), format!("{name} | TakeNote"));
            // A resolved category is ignored outside category mode.
            assert_eq!(
                derive_title(folder, Some(&work())),
                format!("{name} | TakeNote")
            );
        }
    }

    #[test]
    fn title_for_resolved_category() {
        let state = ShellState {
            active_folder: Folder::Category,
            active_category_id: Some(CategoryId::from("work-1")),
            categories: vec![work()],
            ..ShellState::default()
        };
        assert_eq!(state.title(), "Work | TakeNote");
    }

    #[test]
    fn title_for_deleted_category_falls_back_to_app_name() {
        let state = ShellState {
            active_folder: Folder::Category,
            active_category_id: Some(CategoryId::from("deleted-1")),
            categories: vec![work()],
            ..ShellState::default()
        };
        assert!(state.active_category().is_none());
        assert_eq!(state.title(), "TakeNote");
    }

    #[test]
    fn title_for_category_mode_without_selection() {
        let state = ShellState {
            active_folder: Folder::Category,
            categories: vec![work()],
            ..ShellState::default()
        };
        assert_eq!(state.title(), "TakeNote");
    }

    #[test]
    fn root_class_has_dark_modifier_iff_dark() {
        assert_eq!(root_class(false), "app");
        assert_eq!(root_class(true), "app dark");
        for dark in [false, true] {
            let has_modifier = root_class(dark).split_whitespace().any(|c| c == "dark");
            assert_eq!(has_modifier, dark);
        }
    }

    #[test]
    fn page_head_carries_fixed_metadata() {
        let head = PageHead::from_state(&ShellState::default());
        assert_eq!(
            head,
            PageHead {
                charset: "utf-8",
                title: "All Notes | TakeNote".to_string(),
                canonical_url: "https://takenote.dev",
            }
        );
    }

    #[test]
    fn child_regions_render_in_fixed_order() {
        assert_eq!(
            CHILD_REGIONS,
            [
                ChildRegion::Sidebar,
                ChildRegion::NoteList,
                ChildRegion::NoteEditor,
                ChildRegion::KeyboardShortcuts,
                ChildRegion::SettingsModal,
            ]
        );
    }
}
