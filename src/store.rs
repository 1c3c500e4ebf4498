//! App Store
//!
//! One reactive store for cross-page UI state: the visible page, the
//! signed-in session, the toast queue and the chain connection. Record
//! data lives in [`crate::records::Stores`], not here.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ChainStatus, Session, Toast, ToastKind};
use crate::routes::Page;

#[derive(Clone, Debug, Store)]
pub struct AppState {
    pub page: Page,
    pub session: Option<Session>,
    pub toasts: Vec<Toast>,
    pub toast_seq: u32,
    pub chain: Option<ChainStatus>,
}

impl AppState {
    pub fn new(page: Page, session: Option<Session>) -> Self {
        Self {
            page,
            session,
            toasts: Vec::new(),
            toast_seq: 0,
            chain: None,
        }
    }
}

pub type AppStore = Store<AppState>;

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Switches page and keeps the address bar and tab title in step.
pub fn navigate(ui: &AppStore, page: Page) {
    ui.page().set(page);
    sync_location(page);
}

#[cfg(target_arch = "wasm32")]
fn sync_location(page: Page) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(page.path()),
        );
    }
    if let Some(document) = window.document() {
        document.set_title(&format!("{} | GramSetu", page.title()));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn sync_location(_page: Page) {}

/// Appends a toast under a counter id. Dismissing a toast retires its
/// id for good; a pending dismiss timer can never hit a newer toast.
pub fn push_toast(ui: &AppStore, kind: ToastKind, message: impl Into<String>) {
    let id = ui.toast_seq().get_untracked() + 1;
    ui.toast_seq().set(id);
    ui.toasts().write().push(Toast {
        id,
        kind,
        message: message.into(),
    });
}

pub fn dismiss_toast(ui: &AppStore, id: u32) {
    ui.toasts().write().retain(|t| t.id != id);
}

pub fn set_session(ui: &AppStore, session: Option<Session>) {
    ui.session().set(session);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AppStore {
        Store::new(AppState::new(Page::Home, None))
    }

    #[test]
    fn test_toast_ids_are_never_reissued() {
        let ui = store();
        push_toast(&ui, ToastKind::Info, "first");
        push_toast(&ui, ToastKind::Success, "second");
        let ids: Vec<u32> = ui
            .toasts()
            .get_untracked()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);

        dismiss_toast(&ui, 2);
        push_toast(&ui, ToastKind::Error, "third");
        let toasts = ui.toasts().get_untracked();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[1].id, 3, "a dismissed id stays retired");
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let ui = store();
        push_toast(&ui, ToastKind::Info, "keep");
        push_toast(&ui, ToastKind::Info, "drop");
        dismiss_toast(&ui, 2);
        let toasts = ui.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "keep");
    }

    #[test]
    fn test_navigation_swaps_the_page() {
        let ui = store();
        navigate(&ui, Page::Pricing);
        assert_eq!(ui.page().get_untracked(), Page::Pricing);
    }

    #[test]
    fn test_session_round_trips_through_the_store() {
        let ui = store();
        assert!(ui.session().get_untracked().is_none());
        let session = crate::auth::login(
            &crate::storage::StorageHandle::new(crate::storage::MemoryStorage::new()),
            "demo@gramsetu.in",
            "pw",
        )
        .unwrap();
        set_session(&ui, Some(session.clone()));
        assert_eq!(ui.session().get_untracked(), Some(session));
    }
}
