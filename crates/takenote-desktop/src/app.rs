//! Main application component

use std::rc::Rc;

use dioxus::prelude::*;

use takenote_core::activation::{activate, ActiveSession};
use takenote_core::config::AppConfig;
use takenote_core::shell::{ChildRegion, PageHead, CHILD_REGIONS};
use takenote_core::store::StoreCommand;

use crate::components::{KeyboardShortcuts, NoteEditor, NoteList, SettingsModal, Sidebar};
use crate::services::{run_store, CoroutineDispatch};
use crate::state::AppState;
use crate::temp_state::TempStateProvider;

/// Periodic sync task and the session that owns it, kept for the app's lifetime
struct ShellActivation {
    session: ActiveSession,
    task: Task,
}

impl ShellActivation {
    fn stop(&self) {
        self.session.deactivate();
        self.task.cancel();
    }
}

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let state = use_context_provider(AppState::new);

    let db_path = config.db_path.clone();
    let store = use_coroutine(move |commands: UnboundedReceiver<StoreCommand>| {
        run_store(commands, state, db_path.clone())
    });

    // Loads are requested and the periodic sync started once per mount
    let activation = use_hook(move || {
        let source = move || state.sync_payload();
        let (session, periodic) =
            activate(CoroutineDispatch::new(store), source, config.sync_interval());
        let task = spawn(async move {
            periodic.run().await;
        });
        Rc::new(ShellActivation { session, task })
    });
    use_drop(move || activation.stop());

    let shell = state.shell_state();
    let head = PageHead::from_state(&shell);
    let colors = state.colors();

    rsx! {
        document::Meta { charset: head.charset.to_string() }
        document::Title { "{head.title}" }
        document::Link { rel: "canonical", href: head.canonical_url.to_string() }

        div {
            class: shell.root_class(),
            style: "
                display: flex;
                height: 100vh;
                overflow: hidden;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            TempStateProvider {
                for region in CHILD_REGIONS {
                    Region { key: "{region:?}", region }
                }
            }
        }
    }
}

/// One child region of the shell
#[component]
fn Region(region: ChildRegion) -> Element {
    match region {
        ChildRegion::Sidebar => rsx! { Sidebar {} },
        ChildRegion::NoteList => rsx! { NoteList {} },
        ChildRegion::NoteEditor => rsx! { NoteEditor {} },
        ChildRegion::KeyboardShortcuts => rsx! { KeyboardShortcuts {} },
        ChildRegion::SettingsModal => rsx! { SettingsModal {} },
    }
}
