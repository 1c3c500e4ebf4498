//! Nav Bar Component
//!
//! Top navigation: brand, marketing pages, the dashboard strip and the
//! session corner.

use leptos::prelude::*;

use crate::auth;
use crate::models::ToastKind;
use crate::records::use_stores;
use crate::routes::{Page, DASHBOARDS};
use crate::store::{
    navigate, push_toast, set_session, use_app_store, AppStateStoreFields,
};

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = use_app_store();
    let stores = use_stores();

    let link = move |page: Page, label: &'static str| {
        let class = move || {
            if ui.page().get() == page {
                "nav-link active"
            } else {
                "nav-link"
            }
        };
        view! {
            <button class=class on:click=move |_| navigate(&ui, page)>
                {label}
            </button>
        }
    };

    view! {
        <header class="nav-bar">
            <button class="brand" on:click=move |_| navigate(&ui, Page::Home)>
                "GramSetu"
            </button>
            <nav class="nav-links">
                {link(Page::Home, "Home")}
                {link(Page::Pricing, "Pricing")}
                {link(Page::Investors, "Investors")}
                <span class="nav-divider"></span>
                {DASHBOARDS
                    .into_iter()
                    .map(|page| link(page, page.title()))
                    .collect_view()}
            </nav>
            <div class="nav-auth">
                {move || match ui.session().get() {
                    Some(session) => {
                        let stores = stores.clone();
                        let sign_out = move |_| {
                            auth::logout(&stores.storage());
                            set_session(&ui, None);
                            navigate(&ui, Page::Home);
                            push_toast(&ui, ToastKind::Info, "Signed out");
                        };
                        view! {
                            <button class="nav-link" on:click=move |_| navigate(&ui, Page::Profile)>
                                {session.user.name.clone()}
                            </button>
                            <button class="nav-cta ghost" on:click=sign_out>"Sign Out"</button>
                        }
                            .into_any()
                    }
                    None => view! {
                        <button class="nav-link" on:click=move |_| navigate(&ui, Page::Login)>
                            "Sign In"
                        </button>
                        <button class="nav-cta" on:click=move |_| navigate(&ui, Page::Register)>
                            "Get Started"
                        </button>
                    }
                        .into_any(),
                }}
            </div>
        </header>
    }
}
