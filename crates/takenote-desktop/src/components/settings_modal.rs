//! Settings modal component

use dioxus::prelude::*;

use takenote_core::models::NotesSortKey;

use crate::state::AppState;

/// Settings overlay, rendered only while `settings_open` is set
#[component]
pub fn SettingsModal() -> Element {
    let mut state = use_context::<AppState>();
    if !(state.settings_open)() {
        return rsx! {};
    }

    let colors = state.colors();
    let settings = (state.settings)();

    rsx! {
        div {
            class: "settings-overlay",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
            ",
            onclick: move |_| state.settings_open.set(false),

            div {
                class: "settings-modal",
                style: "
                    width: 420px;
                    padding: 20px 24px;
                    border-radius: 10px;
                    border: 1px solid {colors.border};
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                ",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                    h2 { style: "font-size: 16px; margin: 0;", "Settings" }
                    button {
                        style: "border: none; background: none; cursor: pointer; color: {colors.text_secondary};",
                        onclick: move |_| state.settings_open.set(false),
                        "×"
                    }
                }

                SettingRow {
                    label: "Dark mode",
                    description: "Switch the interface to dark colors (Ctrl+Alt+K)",
                    input {
                        r#type: "checkbox",
                        checked: settings.dark_theme,
                        onchange: move |evt| {
                            let checked = evt.checked();
                            state.update_settings(|settings| settings.dark_theme = checked);
                        },
                    }
                }

                SettingRow {
                    label: "Markdown preview",
                    description: "Open notes in preview mode",
                    input {
                        r#type: "checkbox",
                        checked: settings.preview_markdown,
                        onchange: move |evt| {
                            let checked = evt.checked();
                            state.update_settings(|settings| settings.preview_markdown = checked);
                        },
                    }
                }

                SettingRow {
                    label: "Sidebar",
                    description: "Show folders and categories",
                    input {
                        r#type: "checkbox",
                        checked: settings.sidebar_visible,
                        onchange: move |evt| {
                            let checked = evt.checked();
                            state.update_settings(|settings| settings.sidebar_visible = checked);
                        },
                    }
                }

                SettingRow {
                    label: "Sort notes by",
                    description: "Favorites always come first",
                    select {
                        value: settings.notes_sort.as_key(),
                        onchange: move |evt| {
                            let key = NotesSortKey::from_key(&evt.value());
                            state.update_settings(|settings| settings.notes_sort = key);
                        },
                        for sort in NotesSortKey::ALL {
                            {
                                let value = sort.as_key();
                                let label = sort.label();
                                rsx! {
                                    option {
                                        key: "{value}",
                                        value,
                                        selected: sort == settings.notes_sort,
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Shared row layout for settings
#[component]
fn SettingRow(
    #[props(into)] label: String,
    #[props(into)] description: String,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = state.colors();

    rsx! {
        div {
            class: "settings-row",
            style: "
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 16px;
                padding: 10px 0;
                border-bottom: 1px solid {colors.border_light};
            ",

            div {
                class: "settings-row-info",
                div { class: "settings-row-label", "{label}" }
                div {
                    class: "settings-row-description",
                    style: "font-size: 12px; color: {colors.text_secondary};",
                    "{description}"
                }
            }
            div {
                class: "settings-row-control",
                {children}
            }
        }
    }
}
