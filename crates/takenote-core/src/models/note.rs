//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::category::CategoryId;

/// Title shown for notes without any text
pub const UNTITLED_NOTE: &str = "New note";

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Markdown text
    pub text: String,
    /// Creation timestamp (Unix ms)
    pub created: i64,
    /// Last update timestamp (Unix ms)
    pub last_updated: i64,
    /// Category the note is filed under, if any
    pub category: Option<CategoryId>,
    /// The single scratchpad note
    pub scratchpad: bool,
    /// Moved to trash
    pub trash: bool,
    /// Marked as favorite
    pub favorite: bool,
}

impl Note {
    /// Create a new note with the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: NoteId::new(),
            text: text.into(),
            created: now,
            last_updated: now,
            category: None,
            scratchpad: false,
            trash: false,
            favorite: false,
        }
    }

    /// Create the scratchpad note
    #[must_use]
    pub fn new_scratchpad(text: impl Into<String>) -> Self {
        Self {
            scratchpad: true,
            ..Self::new(text)
        }
    }

    /// Replace the text and bump `last_updated`
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.touch();
    }

    /// Bump `last_updated` to now
    pub fn touch(&mut self) {
        self.last_updated = chrono::Utc::now().timestamp_millis().max(self.last_updated);
    }

    /// Title derived from the first non-empty line, without heading markers,
    /// truncated to `max_len` characters
    #[must_use]
    pub fn title(&self, max_len: usize) -> String {
        let line = self
            .text
            .lines()
            .map(|line| line.trim_start_matches('#').trim())
            .find(|line| !line.is_empty());

        line.map_or_else(
            || UNTITLED_NOTE.to_string(),
            |line| line.chars().take(max_len).collect(),
        )
    }

    /// Check if note text is empty (whitespace-only counts as empty)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_parse() {
        let id = NoteId::new();
        let parsed: NoteId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_note_new() {
        let note = Note::new("Hello world");
        assert_eq!(note.text, "Hello world");
        assert!(!note.trash);
        assert!(!note.scratchpad);
        assert!(note.category.is_none());
        assert!(note.created > 0);
        assert_eq!(note.created, note.last_updated);
    }

    #[test]
    fn test_scratchpad() {
        let note = Note::new_scratchpad("scratch");
        assert!(note.scratchpad);
        assert!(!note.favorite);
    }

    #[test]
    fn test_title_strips_heading_markers() {
        let note = Note::new("# Groceries\n- milk");
        assert_eq!(note.title(50), "Groceries");
    }

    #[test]
    fn test_title_skips_blank_lines_and_truncates() {
        let note = Note::new("\n\n   \nSecond paragraph here");
        assert_eq!(note.title(6), "Second");
    }

    #[test]
    fn test_title_of_empty_note() {
        assert_eq!(Note::new("  \n ").title(50), UNTITLED_NOTE);
        assert_eq!(Note::new("###").title(50), UNTITLED_NOTE);
    }

    #[test]
    fn test_set_text_bumps_last_updated() {
        let mut note = Note::new("a");
        note.last_updated = 0;
        note.set_text("b");
        assert_eq!(note.text, "b");
        assert!(note.last_updated > 0);
    }

    #[test]
    fn test_is_empty() {
        assert!(Note::new("   ").is_empty());
        assert!(!Note::new("Hello").is_empty());
    }
}
