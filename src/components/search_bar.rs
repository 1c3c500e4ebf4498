//! Search Bar Component
//!
//! The shared filter strip: free-text search, status facet, sort key
//! and direction. State lives in the owning dashboard so the table
//! memos can read it.

use leptos::prelude::*;

use crate::filters::SortDirection;

#[component]
pub fn SearchBar(
    query: RwSignal<String>,
    status: RwSignal<&'static str>,
    statuses: Vec<&'static str>,
    sort_key: RwSignal<&'static str>,
    /// (key, label) pairs in display order.
    sort_options: Vec<(&'static str, &'static str)>,
    direction: RwSignal<SortDirection>,
) -> impl IntoView {
    let status_values = statuses.clone();
    let sort_values: Vec<&'static str> = sort_options.iter().map(|(key, _)| *key).collect();

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                let picked = event_target_value(&ev);
                if let Some(value) = status_values.iter().copied().find(|s| *s == picked) {
                    status.set(value);
                }
            }>
                {statuses
                    .iter()
                    .copied()
                    .map(|option| {
                        view! {
                            <option value=option prop:selected=move || status.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <select on:change=move |ev| {
                let picked = event_target_value(&ev);
                if let Some(value) = sort_values.iter().copied().find(|k| *k == picked) {
                    sort_key.set(value);
                }
            }>
                {sort_options
                    .iter()
                    .copied()
                    .map(|(key, label)| {
                        view! {
                            <option value=key prop:selected=move || sort_key.get() == key>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button
                type="button"
                class="sort-direction"
                on:click=move |_| direction.set(direction.get_untracked().toggled())
            >
                {move || direction.get().arrow()}
            </button>
        </div>
    }
}
