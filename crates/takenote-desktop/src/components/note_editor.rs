//! Note editor component
//!
//! Edits only change the in-memory note; the periodic sync persists them.

use dioxus::prelude::*;

use takenote_core::models::CategoryId;

use crate::state::AppState;

/// Select value meaning "no category"
const NO_CATEGORY: &str = "";

/// Plain text editor for the active note
#[component]
pub fn NoteEditor() -> Element {
    let mut state = use_context::<AppState>();
    let colors = state.colors();

    let Some(note) = state.active_note() else {
        return rsx! {
            div {
                class: "note-editor empty",
                style: "
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: {colors.text_muted};
                ",
                "Create a note or select one from the list"
            }
        };
    };

    let note_id = note.id;
    let categories = (state.categories)();
    let selected_category = note
        .category
        .as_ref()
        .map_or(NO_CATEGORY, CategoryId::as_str)
        .to_string();
    let favorite_label = if note.favorite {
        "Unfavorite"
    } else {
        "Favorite"
    };
    let trash_label = if note.trash { "Restore" } else { "Trash" };
    let previewing = state.settings.read().preview_markdown;
    let preview_label = if previewing { "Edit" } else { "Preview" };

    let button_style = format!(
        "padding: 4px 10px; border: 1px solid {}; border-radius: 6px; \
         background: {}; color: {}; cursor: pointer;",
        colors.border, colors.bg_primary, colors.text_primary
    );

    rsx! {
        div {
            class: "note-editor",
            style: "flex: 1; display: flex; flex-direction: column; min-width: 0;",

            div {
                class: "note-menu",
                style: "
                    display: flex;
                    gap: 8px;
                    align-items: center;
                    padding: 8px 12px;
                    border-bottom: 1px solid {colors.border};
                    background: {colors.bg_secondary};
                ",

                button {
                    style: "{button_style}",
                    onclick: move |_| state.update_settings(|settings| settings.preview_markdown = !previewing),
                    "{preview_label}"
                }

                if !note.scratchpad {
                    button {
                        style: "{button_style}",
                        onclick: move |_| state.update_note(note_id, |note| note.favorite = !note.favorite),
                        "{favorite_label}"
                    }
                    button {
                        style: "{button_style}",
                        title: "Ctrl+Alt+W",
                        onclick: move |_| state.toggle_trash_active(),
                        "{trash_label}"
                    }
                    select {
                        style: "{button_style}",
                        value: "{selected_category}",
                        onchange: move |evt| {
                            let value = evt.value();
                            state.update_note(note_id, |note| {
                                note.category = (value != NO_CATEGORY).then(|| CategoryId::from(value.as_str()));
                            });
                        },
                        option { value: NO_CATEGORY, "No category" }
                        for category in categories {
                            option {
                                key: "{category.id}",
                                value: "{category.id}",
                                selected: category.id.as_str() == selected_category,
                                "{category.name}"
                            }
                        }
                    }
                }
            }

            if previewing {
                div {
                    class: "note-preview",
                    style: "flex: 1; overflow-y: auto; padding: 16px 20px; line-height: 1.6;",
                    for (index, line) in preview_lines(&note.text).into_iter().enumerate() {
                        {render_preview_line(index, line)}
                    }
                }
            } else {
                textarea {
                    key: "{note_id}",
                    class: "note-text",
                    value: "{note.text}",
                    spellcheck: false,
                    autofocus: true,
                    oninput: move |evt| {
                        let text = evt.value();
                        state.update_note(note_id, |note| note.set_text(text));
                    },
                    style: "
                        flex: 1;
                        padding: 16px 20px;
                        border: none;
                        resize: none;
                        outline: none;
                        font-family: ui-monospace, Menlo, Consolas, monospace;
                        font-size: 14px;
                        line-height: 1.6;
                        background: {colors.bg_primary};
                        color: {colors.text_primary};
                    ",
                }
            }
        }
    }
}

fn render_preview_line(index: usize, line: PreviewLine) -> Element {
    match line {
        PreviewLine::Heading(level, text) => {
            let size = heading_size(level);
            rsx! {
                div {
                    key: "{index}",
                    style: "font-weight: 600; font-size: {size}px; margin: 8px 0 4px;",
                    "{text}"
                }
            }
        }
        PreviewLine::Bullet(text) => rsx! {
            div { key: "{index}", style: "padding-left: 16px;", "• {text}" }
        },
        PreviewLine::Text(text) => rsx! {
            div { key: "{index}", "{text}" }
        },
        PreviewLine::Blank => rsx! {
            div { key: "{index}", style: "height: 0.8em;" }
        },
    }
}

/// One rendered line of the lightweight markdown preview
#[derive(Debug, Clone, PartialEq, Eq)]
enum PreviewLine {
    Heading(usize, String),
    Bullet(String),
    Text(String),
    Blank,
}

fn preview_lines(text: &str) -> Vec<PreviewLine> {
    text.lines()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return PreviewLine::Blank;
            }
            let level = trimmed.chars().take_while(|c| *c == '#').count();
            if (1..=6).contains(&level) && trimmed[level..].starts_with(' ') {
                return PreviewLine::Heading(level, trimmed[level..].trim().to_string());
            }
            match trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
                Some(item) => PreviewLine::Bullet(item.trim().to_string()),
                None => PreviewLine::Text(trimmed.to_string()),
            }
        })
        .collect()
}

const fn heading_size(level: usize) -> usize {
    match level {
        1 => 22,
        2 => 18,
        _ => 15,
    }
}
