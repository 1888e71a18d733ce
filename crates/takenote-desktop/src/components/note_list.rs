//! Note list component

use dioxus::prelude::*;

use takenote_core::models::Folder;

use super::{NoteCard, SearchBar};
use crate::state::AppState;

const TITLE_LEN: usize = 40;
const PREVIEW_LEN: usize = 60;

/// Notes of the selected folder with search and a new-note button
#[component]
pub fn NoteList() -> Element {
    let mut state = use_context::<AppState>();
    let visible_notes = state.visible_notes();
    let active_id = (state.active_note_id)();
    let colors = state.colors();
    let can_create = !matches!((state.active_folder)(), Folder::Trash);
    let sidebar_hidden = !state.settings.read().sidebar_visible;

    let empty_message = if (state.loading)() {
        "Loading notes..."
    } else {
        "No notes"
    };

    rsx! {
        div {
            class: "note-list",
            style: "
                width: 280px;
                display: flex;
                flex-direction: column;
                border-right: 1px solid {colors.border};
                background: {colors.bg_primary};
            ",

            div {
                style: "display: flex; gap: 8px; align-items: center; padding-right: 12px; background: {colors.bg_secondary};",
                if sidebar_hidden {
                    button {
                        class: "show-sidebar",
                        title: "Show sidebar",
                        style: "margin-left: 12px; border: none; background: none; cursor: pointer; color: {colors.text_secondary};",
                        onclick: move |_| state.update_settings(|settings| settings.sidebar_visible = true),
                        "☰"
                    }
                }
                div { style: "flex: 1;", SearchBar {} }
                if can_create {
                    button {
                        class: "new-note",
                        title: "New note (Ctrl+Alt+N)",
                        style: "
                            padding: 6px 10px;
                            border: none;
                            border-radius: 6px;
                            background: {colors.accent};
                            color: {colors.accent_text};
                            cursor: pointer;
                        ",
                        onclick: move |_| state.create_note(),
                        "+ New"
                    }
                }
            }

            div {
                style: "flex: 1; overflow-y: auto;",
                if visible_notes.is_empty() {
                    div {
                        style: "
                            padding: 20px;
                            text-align: center;
                            color: {colors.text_muted};
                        ",
                        "{empty_message}"
                    }
                } else {
                    for note in visible_notes {
                        {
                            let note_id = note.id;
                            let is_selected = active_id == Some(note_id);
                            let title = note.title(TITLE_LEN);
                            let preview = preview_line(&note.text, PREVIEW_LEN);

                            rsx! {
                                NoteCard {
                                    key: "{note_id}",
                                    title,
                                    preview,
                                    favorite: note.favorite,
                                    is_selected,
                                    onclick: move |_| {
                                        state.active_note_id.set(Some(note_id));
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Second non-empty line of the note, truncated
fn preview_line(text: &str, max_len: usize) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .nth(1)
        .map(|line| line.chars().take(max_len).collect())
        .unwrap_or_default()
}
