//! Vans Dashboard Component
//!
//! Mobile retail van fleet: reach and revenue stats, per-district
//! chart, fleet table and the onboarding form.

use leptos::prelude::*;

use super::{BarChart, SearchBar, StatCard, ValueFormat};
use crate::filters::{apply_filters, compare_vans, sorted_by, SortDirection, STATUS_ALL};
use crate::models::{PerformanceMetrics, ServiceStatus, SocialImpact, ToastKind, Van};
use crate::money::{format_inr, parse_amount};
use crate::records::use_stores;
use crate::stats::outlet_stats;
use crate::store::{push_toast, use_app_store};

const SORT_OPTIONS: [(&str, &str); 6] = [
    ("id", "Newest"),
    ("owner", "Owner"),
    ("district", "District"),
    ("revenue", "Revenue"),
    ("uptime", "Uptime"),
    ("households", "Households"),
];

fn status_class(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Active => "badge active",
        ServiceStatus::Maintenance => "badge maintenance",
    }
}

#[component]
pub fn VansDashboard() -> impl IntoView {
    let ui = use_app_store();
    let vans = use_stores().vans;
    let records = vans.signal();

    let query = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL);
    let sort_key = RwSignal::new("id");
    let direction = RwSignal::new(SortDirection::Ascending);

    let stats = Memo::new(move |_| outlet_stats(&records.get()));
    let visible = Memo::new(move |_| {
        let filtered = apply_filters(&records.get(), &query.get(), status.get());
        let key = sort_key.get();
        sorted_by(filtered, direction.get(), move |a, b| compare_vans(a, b, key))
    });

    let statuses: Vec<&'static str> = std::iter::once(STATUS_ALL)
        .chain(ServiceStatus::ALL.iter().map(|s| s.as_str()))
        .collect();

    let (owner, set_owner) = signal(String::new());
    let (district, set_district) = signal(String::new());
    let (revenue, set_revenue) = signal(String::new());
    let (uptime, set_uptime) = signal(String::new());
    let (households, set_households) = signal(String::new());
    let (jobs, set_jobs) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<String>);

    let add_van = {
        let store = vans.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let owner_v = owner.get().trim().to_string();
            let district_v = district.get().trim().to_string();
            let revenue_v = parse_amount(&revenue.get());
            let uptime_v: Option<f64> = uptime.get().trim().parse().ok();
            let households_v: Option<u32> = households.get().trim().parse().ok();
            let jobs_v: Option<u32> = jobs.get().trim().parse().ok();

            let invalid = if owner_v.is_empty() {
                Some("Owner name is required")
            } else if district_v.is_empty() {
                Some("District is required")
            } else if revenue_v <= 0.0 {
                Some("Monthly revenue is required")
            } else if !uptime_v.is_some_and(|u| (0.0..=100.0).contains(&u)) {
                Some("Uptime must be between 0 and 100")
            } else if households_v.is_none() || jobs_v.is_none() {
                Some("Households and jobs must be whole numbers")
            } else {
                None
            };
            if let Some(msg) = invalid {
                set_form_error.set(Some(msg.to_string()));
                return;
            }
            set_form_error.set(None);

            let created = store.create(|id| Van {
                id,
                owner: owner_v.clone(),
                district: district_v.clone(),
                status: ServiceStatus::Active,
                impact: SocialImpact {
                    households_served: households_v.unwrap_or(0),
                    jobs_created: jobs_v.unwrap_or(0),
                },
                performance: PerformanceMetrics {
                    monthly_revenue: revenue_v,
                    uptime_percent: uptime_v.unwrap_or(0.0),
                },
            });
            push_toast(&ui, ToastKind::Success, format!("{} onboarded", created.code()));
            set_owner.set(String::new());
            set_district.set(String::new());
            set_revenue.set(String::new());
            set_uptime.set(String::new());
            set_households.set(String::new());
            set_jobs.set(String::new());
        }
    };

    view! {
        <div class="page dashboard">
            <h1>"Mobile Vans"</h1>
            <div class="stat-row">
                <StatCard label="Vans" value=Signal::derive(move || stats.get().outlets.to_string()) />
                <StatCard
                    label="On Route"
                    value=Signal::derive(move || stats.get().active.to_string())
                />
                <StatCard
                    label="In Workshop"
                    value=Signal::derive(move || stats.get().maintenance.to_string())
                />
                <StatCard
                    label="Households Served"
                    value=Signal::derive(move || stats.get().households.to_string())
                />
                <StatCard
                    label="Local Jobs"
                    value=Signal::derive(move || stats.get().jobs.to_string())
                />
                <StatCard
                    label="Monthly Revenue"
                    value=Signal::derive(move || format_inr(stats.get().monthly_revenue))
                />
                <StatCard
                    label="Avg Uptime"
                    value=Signal::derive(move || format!("{:.1}%", stats.get().avg_uptime))
                />
            </div>

            <BarChart
                title="Revenue by district"
                data=Signal::derive(move || stats.get().revenue_by_area)
                format=ValueFormat::Rupees
            />

            <SearchBar
                query=query
                status=status
                statuses=statuses
                sort_key=sort_key
                sort_options=SORT_OPTIONS.to_vec()
                direction=direction
            />

            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            <th>"Van"</th>
                            <th>"Owner"</th>
                            <th>"District"</th>
                            <th>"Households"</th>
                            <th>"Jobs"</th>
                            <th>"Revenue"</th>
                            <th>"Uptime"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|van| van.id
                            children=move |van| {
                                let toggle = {
                                    let store = vans.clone();
                                    let row = van.clone();
                                    move |_| {
                                        let mut updated = row.clone();
                                        updated.status = updated.status.toggled();
                                        let note = format!(
                                            "{} set to {}",
                                            updated.code(),
                                            updated.status.as_str()
                                        );
                                        store.update(updated);
                                        push_toast(&ui, ToastKind::Info, note);
                                    }
                                };
                                let remove = {
                                    let store = vans.clone();
                                    let id = van.id;
                                    let code = van.code();
                                    move |_| {
                                        store.remove(id);
                                        push_toast(&ui, ToastKind::Info, format!("{code} removed"));
                                    }
                                };
                                view! {
                                    <tr>
                                        <td class="mono">{van.code()}</td>
                                        <td>{van.owner.clone()}</td>
                                        <td>{van.district.clone()}</td>
                                        <td>{van.impact.households_served}</td>
                                        <td>{van.impact.jobs_created}</td>
                                        <td>{format_inr(van.performance.monthly_revenue)}</td>
                                        <td>{format!("{:.1}%", van.performance.uptime_percent)}</td>
                                        <td>
                                            <span class=status_class(van.status)>
                                                {van.status.as_str()}
                                            </span>
                                        </td>
                                        <td class="row-actions">
                                            <button class="row-action" on:click=toggle>
                                                "Toggle Status"
                                            </button>
                                            <button class="row-action danger" on:click=remove>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                {move || {
                    visible.get().is_empty().then(|| {
                        view! { <p class="empty-note">"No vans match the current filters"</p> }
                    })
                }}
            </div>

            <form class="record-form" on:submit=add_van>
                <h3>"Onboard a van"</h3>
                <div class="form-grid">
                    <input
                        type="text"
                        placeholder="Owner"
                        prop:value=move || owner.get()
                        on:input=move |ev| set_owner.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="District"
                        prop:value=move || district.get()
                        on:input=move |ev| set_district.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Monthly revenue (₹)"
                        prop:value=move || revenue.get()
                        on:input=move |ev| set_revenue.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        max="100"
                        step="0.1"
                        placeholder="Uptime %"
                        prop:value=move || uptime.get()
                        on:input=move |ev| set_uptime.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        placeholder="Households served"
                        prop:value=move || households.get()
                        on:input=move |ev| set_households.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        placeholder="Jobs created"
                        prop:value=move || jobs.get()
                        on:input=move |ev| set_jobs.set(event_target_value(&ev))
                    />
                </div>
                {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="cta">"Onboard"</button>
            </form>
        </div>
    }
}
