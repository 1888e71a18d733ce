//! Document-wide keyboard shortcuts

use dioxus::prelude::*;
use serde::Deserialize;

use takenote_core::store::{Dispatch, StoreCommand};

use crate::services::CoroutineDispatch;
use crate::state::AppState;

/// Forwards Ctrl+Alt presses of the shortcut keys from the page to Rust.
/// Other keys pass through so AltGr input keeps working.
const KEY_LISTENER_JS: &str = r"
if (!window.__takenoteShortcuts) {
    window.__takenoteShortcuts = true;
    const keys = ['KeyN', 'KeyW', 'KeyK', 'KeyL'];
    document.addEventListener('keydown', (event) => {
        if (!(event.ctrlKey && event.altKey) || !keys.includes(event.code)) {
            return;
        }
        event.preventDefault();
        dioxus.send({
            code: event.code,
            ctrl: event.ctrlKey,
            alt: event.altKey,
            shift: event.shiftKey,
        });
    });
}
";

/// Physical key plus modifiers of a key press
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyChord {
    /// `KeyboardEvent.code`, independent of layout and modifiers
    pub code: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    NewNote,
    TrashNote,
    ToggleTheme,
    SyncNow,
}

/// Map a key press to its shortcut. Every shortcut is Ctrl+Alt+letter.
pub fn shortcut_for(chord: &KeyChord) -> Option<Shortcut> {
    if !chord.ctrl || !chord.alt || chord.shift {
        return None;
    }
    match chord.code.as_str() {
        "KeyN" => Some(Shortcut::NewNote),
        "KeyW" => Some(Shortcut::TrashNote),
        "KeyK" => Some(Shortcut::ToggleTheme),
        "KeyL" => Some(Shortcut::SyncNow),
        _ => None,
    }
}

/// Renders nothing; listens for shortcuts while mounted
#[component]
pub fn KeyboardShortcuts() -> Element {
    let mut state = use_context::<AppState>();
    let store = use_coroutine_handle::<StoreCommand>();

    use_future(move || async move {
        let mut listener = document::eval(KEY_LISTENER_JS);
        loop {
            let chord = match listener.recv::<KeyChord>().await {
                Ok(chord) => chord,
                Err(e) => {
                    tracing::warn!("Keyboard shortcut listener stopped: {:?}", e);
                    break;
                }
            };
            let Some(shortcut) = shortcut_for(&chord) else {
                continue;
            };

            tracing::debug!("Shortcut {:?}", shortcut);
            match shortcut {
                Shortcut::NewNote => state.create_note(),
                Shortcut::TrashNote => state.toggle_trash_active(),
                Shortcut::ToggleTheme => {
                    state.update_settings(|settings| settings.dark_theme = !settings.dark_theme);
                }
                Shortcut::SyncNow => CoroutineDispatch::new(store).sync_state(state.sync_payload()),
            }
        }
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(code: &str, ctrl: bool, alt: bool, shift: bool) -> KeyChord {
        KeyChord {
            code: code.to_string(),
            ctrl,
            alt,
            shift,
        }
    }

    #[test]
    fn ctrl_alt_letters_map_to_shortcuts() {
        assert_eq!(shortcut_for(&chord("KeyN", true, true, false)), Some(Shortcut::NewNote));
        assert_eq!(shortcut_for(&chord("KeyW", true, true, false)), Some(Shortcut::TrashNote));
        assert_eq!(shortcut_for(&chord("KeyK", true, true, false)), Some(Shortcut::ToggleTheme));
        assert_eq!(shortcut_for(&chord("KeyL", true, true, false)), Some(Shortcut::SyncNow));
    }

    #[test]
    fn other_chords_are_ignored() {
        assert_eq!(shortcut_for(&chord("KeyN", true, false, false)), None);
        assert_eq!(shortcut_for(&chord("KeyN", false, true, false)), None);
        assert_eq!(shortcut_for(&chord("KeyN", true, true, true)), None);
        assert_eq!(shortcut_for(&chord("KeyQ", true, true, false)), None);
    }

    #[test]
    fn chord_deserializes_from_listener_payload() {
        let parsed: KeyChord = serde_json::from_str(
            r#"{ "code": "KeyL", "ctrl": true, "alt": true, "shift": false }"#,
        )
        .unwrap();
        assert_eq!(shortcut_for(&parsed), Some(Shortcut::SyncNow));
    }
}
