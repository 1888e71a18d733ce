//! Sidebar component with folders and categories

use dioxus::prelude::*;

use takenote_core::filter::notes_in_folder;
use takenote_core::models::{CategoryId, Folder};

use crate::state::AppState;
use crate::temp_state::TempState;

/// Sidebar showing folders, categories and sync status
#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<AppState>();
    let mut temp = use_context::<TempState>();
    let colors = state.colors();

    if !state.settings.read().sidebar_visible {
        return rsx! {};
    }

    let active_folder = (state.active_folder)();
    let active_category_id = (state.active_category_id)();
    let categories = (state.categories)();
    let folder_counts: Vec<(Folder, usize)> = {
        let notes = state.notes.read();
        Folder::sidebar_folders()
            .into_iter()
            .map(|folder| (folder, notes_in_folder(&notes, folder, None).len()))
            .collect()
    };
    let sync_label = state.sync_status.read().label();
    let editing = (temp.editing_category)();

    let mut commit_category_input = move || {
        let editing = temp.editing_category.peek().clone();
        let draft = temp.finish_category_input();
        if let Some(id) = editing {
            state.rename_category(&id, &draft);
        } else if let Some(id) = state.add_category(&draft) {
            tracing::info!("Added category {}", id);
        }
    };

    rsx! {
        aside {
            class: "sidebar",
            style: "
                width: 220px;
                display: flex;
                flex-direction: column;
                background: {colors.bg_secondary};
                border-right: 1px solid {colors.border};
                padding: 16px 12px;
                overflow-y: auto;
            ",

            for (folder, count) in folder_counts {
                SidebarItem {
                    key: "{folder}",
                    label: folder.display_name(),
                    count,
                    is_active: active_folder == folder,
                    onclick: move |_| state.select_folder(folder),
                }
            }

            div {
                style: "
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin: 20px 0 8px;
                    color: {colors.text_secondary};
                    font-size: 12px;
                    font-weight: 600;
                    text-transform: uppercase;
                ",
                span { "Categories" }
                button {
                    class: "category-add",
                    title: "Add category",
                    style: "border: none; background: none; cursor: pointer; color: {colors.text_secondary};",
                    onclick: move |_| temp.start_adding_category(),
                    "+"
                }
            }

            for category in categories {
                {
                    let id = category.id.clone();
                    let is_active =
                        active_folder == Folder::Category && active_category_id.as_ref() == Some(&id);
                    let is_editing = editing.as_ref() == Some(&id);
                    let count = {
                        let notes = state.notes.read();
                        notes_in_folder(&notes, Folder::Category, Some(&id)).len()
                    };
                    rsx! {
                        if is_editing {
                            CategoryInput {
                                key: "{id}",
                                on_commit: move |()| commit_category_input(),
                            }
                        } else {
                            CategoryItem {
                                key: "{id}",
                                id: id.clone(),
                                name: category.name.clone(),
                                count,
                                is_active,
                            }
                        }
                    }
                }
            }

            if (temp.adding_category)() {
                CategoryInput {
                    on_commit: move |()| commit_category_input(),
                }
            }

            div { style: "flex: 1;" }

            div {
                class: "sync-status",
                style: "font-size: 12px; color: {colors.text_muted}; margin-bottom: 8px;",
                "{sync_label}"
            }

            button {
                class: "settings-button",
                style: "
                    padding: 6px 10px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    cursor: pointer;
                ",
                onclick: move |_| state.settings_open.set(true),
                "Settings"
            }
        }
    }
}

/// Folder link in the sidebar
#[component]
fn SidebarItem(
    #[props(into)] label: String,
    count: usize,
    is_active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = state.colors();

    let bg = if is_active {
        colors.accent
    } else {
        "transparent"
    };
    let text_color = if is_active {
        colors.accent_text
    } else {
        colors.text_primary
    };

    rsx! {
        div {
            style: "
                padding: 6px 10px;
                border-radius: 6px;
                cursor: pointer;
                margin-bottom: 2px;
                background: {bg};
                color: {text_color};
                display: flex;
                justify-content: space-between;
                align-items: center;
            ",
            onclick: onclick,
            span { "{label}" }
            span {
                style: "font-size: 12px; opacity: 0.7;",
                "{count}"
            }
        }
    }
}

/// Category row: select on click, rename on double click
#[component]
fn CategoryItem(id: CategoryId, name: String, count: usize, is_active: bool) -> Element {
    let mut state = use_context::<AppState>();
    let mut temp = use_context::<TempState>();
    let colors = state.colors();

    let select_id = id.clone();
    let edit_id = id.clone();
    let edit_name = name.clone();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 4px;",
            div {
                style: "flex: 1;",
                ondoubleclick: move |_| {
                    temp.adding_category.set(false);
                    temp.category_draft.set(edit_name.clone());
                    temp.editing_category.set(Some(edit_id.clone()));
                },
                SidebarItem {
                    label: name,
                    count,
                    is_active,
                    onclick: move |_| state.select_category(select_id.clone()),
                }
            }
            button {
                class: "category-delete",
                title: "Delete category",
                style: "border: none; background: none; cursor: pointer; color: {colors.text_muted};",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    tracing::info!("Deleting category {}", id);
                    state.delete_category(&id);
                },
                "×"
            }
        }
    }
}

/// Text input bound to the category draft; Enter commits, Escape cancels
#[component]
fn CategoryInput(on_commit: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let mut temp = use_context::<TempState>();
    let colors = state.colors();

    rsx! {
        input {
            r#type: "text",
            placeholder: "New category...",
            autofocus: true,
            value: "{temp.category_draft}",
            oninput: move |evt| temp.category_draft.set(evt.value()),
            onkeydown: move |evt: Event<KeyboardData>| match evt.key() {
                Key::Enter => on_commit.call(()),
                Key::Escape => {
                    temp.finish_category_input();
                }
                _ => {}
            },
            onblur: move |_| on_commit.call(()),
            style: "
                width: 100%;
                padding: 6px 10px;
                margin-bottom: 2px;
                border: 1px solid {colors.accent};
                border-radius: 6px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
                outline: none;
            ",
        }
    }
}
