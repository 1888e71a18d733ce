//! Transient UI state shared by the page regions but never persisted

use dioxus::prelude::*;

use takenote_core::models::CategoryId;

#[derive(Clone, Copy)]
pub struct TempState {
    /// Category whose name is being edited
    pub editing_category: Signal<Option<CategoryId>>,
    /// Whether the new-category input is shown
    pub adding_category: Signal<bool>,
    /// Text of the category input
    pub category_draft: Signal<String>,
}

impl TempState {
    /// Show the new-category input with an empty draft
    pub fn start_adding_category(&mut self) {
        self.editing_category.set(None);
        self.category_draft.set(String::new());
        self.adding_category.set(true);
    }

    /// Hide the category input and take its draft
    pub fn finish_category_input(&mut self) -> String {
        self.adding_category.set(false);
        self.editing_category.set(None);
        std::mem::take(&mut *self.category_draft.write())
    }
}

/// Provides [`TempState`] to its children
#[component]
pub fn TempStateProvider(children: Element) -> Element {
    use_context_provider(|| TempState {
        editing_category: Signal::new(None),
        adding_category: Signal::new(false),
        category_draft: Signal::new(String::new()),
    });

    rsx! {
        {children}
    }
}
