//! App Component
//!
//! Root of the tree: opens storage and the record stores, restores any
//! saved session, provides both through context and renders whichever
//! page the store points at.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth;
use crate::components::{
    ChainDashboard, DroneDashboard, HomePage, InventoryDashboard, InvestorsPage,
    KiosksDashboard, LoginPage, NavBar, PricingPage, ProfilePage, RegisterPage,
    SustainabilityDashboard, ToastStack, VansDashboard,
};
use crate::records::Stores;
use crate::routes::Page;
use crate::storage;
use crate::store::{AppState, AppStateStoreFields, AppStore};

fn initial_page() -> Page {
    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();
    Page::from_path(&path)
}

#[component]
pub fn App() -> impl IntoView {
    let storage = storage::default_backend();
    let stores = Stores::open(storage.clone());
    let session = auth::load_session(&storage);
    let ui: AppStore = Store::new(AppState::new(initial_page(), session));

    provide_context(stores);
    provide_context(ui);

    view! {
        <NavBar />
        <main>
            {move || match ui.page().get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Pricing => view! { <PricingPage /> }.into_any(),
                Page::Investors => view! { <InvestorsPage /> }.into_any(),
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::Register => view! { <RegisterPage /> }.into_any(),
                Page::Profile => match ui.session().get() {
                    Some(session) => view! { <ProfilePage session /> }.into_any(),
                    None => view! { <LoginPage /> }.into_any(),
                },
                Page::DroneDashboard => view! { <DroneDashboard /> }.into_any(),
                Page::InventoryDashboard => view! { <InventoryDashboard /> }.into_any(),
                Page::VansDashboard => view! { <VansDashboard /> }.into_any(),
                Page::KiosksDashboard => view! { <KiosksDashboard /> }.into_any(),
                Page::ChainDashboard => view! { <ChainDashboard /> }.into_any(),
                Page::SustainabilityDashboard => {
                    view! { <SustainabilityDashboard /> }.into_any()
                }
            }}
        </main>
        <ToastStack />
    }
}
