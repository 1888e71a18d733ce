//! UI Components
//!
//! The five page regions mounted by the app shell, and their parts.

mod keyboard_shortcuts;
mod note_card;
mod note_editor;
mod note_list;
mod search_bar;
mod settings_modal;
mod sidebar;

pub use keyboard_shortcuts::KeyboardShortcuts;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use search_bar::SearchBar;
pub use settings_modal::SettingsModal;
pub use sidebar::Sidebar;
