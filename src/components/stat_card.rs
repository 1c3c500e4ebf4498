//! Stat Card Component
//!
//! Single headline number on the dashboard summary strip.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
            {hint.map(|h| view! { <span class="stat-hint">{h}</span> })}
        </div>
    }
}
