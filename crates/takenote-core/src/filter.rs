//! Note list filtering and ordering

use std::cmp::Ordering;

use crate::models::{CategoryId, Folder, Note, NotesSortKey};

/// Notes visible in the given folder.
///
/// In category mode only notes of `active_category_id` are returned; a
/// missing selection yields an empty list.
pub fn notes_in_folder<'a>(
    notes: &'a [Note],
    folder: Folder,
    active_category_id: Option<&CategoryId>,
) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| match folder {
            Folder::All => !note.trash && !note.scratchpad,
            Folder::Favorites => note.favorite && !note.trash,
            Folder::Scratchpad => note.scratchpad,
            Folder::Trash => note.trash,
            Folder::Category => {
                !note.trash
                    && active_category_id.is_some()
                    && note.category.as_ref() == active_category_id
            }
        })
        .collect()
}

/// Case-insensitive text filter; an empty query keeps everything
pub fn search_notes<'a>(notes: Vec<&'a Note>, query: &str) -> Vec<&'a Note> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return notes;
    }
    notes
        .into_iter()
        .filter(|note| note.text.to_lowercase().contains(&query))
        .collect()
}

/// Sort favorites first, then by `key`
pub fn sort_notes(notes: &mut [&Note], key: NotesSortKey) {
    notes.sort_by(|a, b| b.favorite.cmp(&a.favorite).then_with(|| compare(a, b, key)));
}

fn compare(a: &Note, b: &Note, key: NotesSortKey) -> Ordering {
    match key {
        NotesSortKey::LastUpdated => b.last_updated.cmp(&a.last_updated),
        NotesSortKey::Title => a
            .title(usize::MAX)
            .to_lowercase()
            .cmp(&b.title(usize::MAX).to_lowercase()),
        NotesSortKey::CreatedDate => b.created.cmp(&a.created),
    }
}

/// Notes of the folder, searched and sorted, ready for the note list
pub fn visible_notes<'a>(
    notes: &'a [Note],
    folder: Folder,
    active_category_id: Option<&CategoryId>,
    query: &str,
    key: NotesSortKey,
) -> Vec<&'a Note> {
    let mut visible = search_notes(notes_in_folder(notes, folder, active_category_id), query);
    sort_notes(&mut visible, key);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Note>, CategoryId) {
        let work = CategoryId::from("work");
        let mut plain = Note::new("plain");
        plain.last_updated = 10;
        let mut favorite = Note::new("favorite");
        favorite.favorite = true;
        favorite.last_updated = 5;
        let mut trashed = Note::new("trashed");
        trashed.trash = true;
        let scratchpad = Note::new_scratchpad("scratch");
        let mut filed = Note::new("filed under work");
        filed.category = Some(work.clone());
        filed.last_updated = 20;
        let mut trashed_filed = Note::new("old work");
        trashed_filed.category = Some(work.clone());
        trashed_filed.trash = true;
        (
            vec![plain, favorite, trashed, scratchpad, filed, trashed_filed],
            work,
        )
    }

    fn texts(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|note| note.text.clone()).collect()
    }

    #[test]
    fn all_excludes_trash_and_scratchpad() {
        let (notes, _) = fixture();
        assert_eq!(
            texts(&notes_in_folder(&notes, Folder::All, None)),
            vec!["plain", "favorite", "filed under work"]
        );
    }

    #[test]
    fn fixed_folders() {
        let (notes, _) = fixture();
        assert_eq!(
            texts(&notes_in_folder(&notes, Folder::Favorites, None)),
            vec!["favorite"]
        );
        assert_eq!(
            texts(&notes_in_folder(&notes, Folder::Scratchpad, None)),
            vec!["scratch"]
        );
        assert_eq!(
            texts(&notes_in_folder(&notes, Folder::Trash, None)),
            vec!["trashed", "old work"]
        );
    }

    #[test]
    fn category_folder_needs_matching_selection() {
        let (notes, work) = fixture();
        assert_eq!(
            texts(&notes_in_folder(&notes, Folder::Category, Some(&work))),
            vec!["filed under work"]
        );
        assert!(notes_in_folder(&notes, Folder::Category, None).is_empty());
        let deleted = CategoryId::from("deleted-1");
        assert!(notes_in_folder(&notes, Folder::Category, Some(&deleted)).is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let (notes, _) = fixture();
        let found = search_notes(notes_in_folder(&notes, Folder::All, None), "  WORK ");
        assert_eq!(texts(&found), vec!["filed under work"]);
    }

    #[test]
    fn sort_puts_favorites_first() {
        let (notes, _) = fixture();
        let visible = visible_notes(&notes, Folder::All, None, "", NotesSortKey::LastUpdated);
        assert_eq!(texts(&visible), vec!["favorite", "filed under work", "plain"]);

        let by_title = visible_notes(&notes, Folder::All, None, "", NotesSortKey::Title);
        assert_eq!(texts(&by_title), vec!["favorite", "filed under work", "plain"]);
    }

    #[test]
    fn sort_by_created_date_newest_first() {
        let mut older = Note::new("older");
        older.created = 1;
        let mut newer = Note::new("newer");
        newer.created = 2;
        let notes = vec![older, newer];
        let visible = visible_notes(&notes, Folder::All, None, "", NotesSortKey::CreatedDate);
        assert_eq!(texts(&visible), vec!["newer", "older"]);
    }
}
