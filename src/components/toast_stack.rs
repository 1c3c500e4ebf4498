//! Toast Stack Component
//!
//! Corner notifications fed from the app store. Each toast dismisses
//! itself after four seconds or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{dismiss_toast, use_app_store, AppStateStoreFields};

const TOAST_MILLIS: u32 = 4_000;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || ui.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    spawn_local(async move {
                        TimeoutFuture::new(TOAST_MILLIS).await;
                        dismiss_toast(&ui, id);
                    });
                    view! {
                        <div class=toast.kind.css_class()>
                            <span>{toast.message.clone()}</span>
                            <button class="toast-close" on:click=move |_| dismiss_toast(&ui, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
