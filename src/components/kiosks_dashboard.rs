//! Kiosks Dashboard Component
//!
//! Village kiosk network: reach and revenue stats, per-village chart,
//! kiosk table and the onboarding form.

use leptos::prelude::*;

use super::{BarChart, SearchBar, StatCard, ValueFormat};
use crate::filters::{apply_filters, compare_kiosks, sorted_by, SortDirection, STATUS_ALL};
use crate::models::{Kiosk, PerformanceMetrics, ServiceStatus, SocialImpact, ToastKind};
use crate::money::{format_inr, parse_amount};
use crate::records::use_stores;
use crate::stats::outlet_stats;
use crate::store::{push_toast, use_app_store};

const SORT_OPTIONS: [(&str, &str); 6] = [
    ("id", "Newest"),
    ("entrepreneur", "Entrepreneur"),
    ("village", "Village"),
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
pub fn KiosksDashboard() -> impl IntoView {
    let ui = use_app_store();
    let kiosks = use_stores().kiosks;
    let records = kiosks.signal();

    let query = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL);
    let sort_key = RwSignal::new("id");
    let direction = RwSignal::new(SortDirection::Ascending);

    let stats = Memo::new(move |_| outlet_stats(&records.get()));
    let visible = Memo::new(move |_| {
        let filtered = apply_filters(&records.get(), &query.get(), status.get());
        let key = sort_key.get();
        sorted_by(filtered, direction.get(), move |a, b| {
            compare_kiosks(a, b, key)
        })
    });

    let statuses: Vec<&'static str> = std::iter::once(STATUS_ALL)
        .chain(ServiceStatus::ALL.iter().map(|s| s.as_str()))
        .collect();

    let (entrepreneur, set_entrepreneur) = signal(String::new());
    let (village, set_village) = signal(String::new());
    let (revenue, set_revenue) = signal(String::new());
    let (uptime, set_uptime) = signal(String::new());
    let (households, set_households) = signal(String::new());
    let (jobs, set_jobs) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<String>);

    let add_kiosk = {
        let store = kiosks.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let entrepreneur_v = entrepreneur.get().trim().to_string();
            let village_v = village.get().trim().to_string();
            let revenue_v = parse_amount(&revenue.get());
            let uptime_v: Option<f64> = uptime.get().trim().parse().ok();
            let households_v: Option<u32> = households.get().trim().parse().ok();
            let jobs_v: Option<u32> = jobs.get().trim().parse().ok();

            let invalid = if entrepreneur_v.is_empty() {
                Some("Entrepreneur name is required")
            } else if village_v.is_empty() {
                Some("Village is required")
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

            let created = store.create(|id| Kiosk {
                id,
                entrepreneur: entrepreneur_v.clone(),
                village: village_v.clone(),
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
            push_toast(&ui, ToastKind::Success, format!("{} opened", created.code()));
            set_entrepreneur.set(String::new());
            set_village.set(String::new());
            set_revenue.set(String::new());
            set_uptime.set(String::new());
            set_households.set(String::new());
            set_jobs.set(String::new());
        }
    };

    view! {
        <div class="page dashboard">
            <h1>"Village Kiosks"</h1>
            <div class="stat-row">
                <StatCard
                    label="Kiosks"
                    value=Signal::derive(move || stats.get().outlets.to_string())
                />
                <StatCard
                    label="Open Today"
                    value=Signal::derive(move || stats.get().active.to_string())
                />
                <StatCard
                    label="Under Maintenance"
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
                title="Revenue by village"
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
                            <th>"Kiosk"</th>
                            <th>"Entrepreneur"</th>
                            <th>"Village"</th>
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
                            key=|kiosk| kiosk.id
                            children=move |kiosk| {
                                let toggle = {
                                    let store = kiosks.clone();
                                    let row = kiosk.clone();
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
                                    let store = kiosks.clone();
                                    let id = kiosk.id;
                                    let code = kiosk.code();
                                    move |_| {
                                        store.remove(id);
                                        push_toast(&ui, ToastKind::Info, format!("{code} removed"));
                                    }
                                };
                                view! {
                                    <tr>
                                        <td class="mono">{kiosk.code()}</td>
                                        <td>{kiosk.entrepreneur.clone()}</td>
                                        <td>{kiosk.village.clone()}</td>
                                        <td>{kiosk.impact.households_served}</td>
                                        <td>{kiosk.impact.jobs_created}</td>
                                        <td>{format_inr(kiosk.performance.monthly_revenue)}</td>
                                        <td>{format!("{:.1}%", kiosk.performance.uptime_percent)}</td>
                                        <td>
                                            <span class=status_class(kiosk.status)>
                                                {kiosk.status.as_str()}
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
                        view! { <p class="empty-note">"No kiosks match the current filters"</p> }
                    })
                }}
            </div>

            <form class="record-form" on:submit=add_kiosk>
                <h3>"Open a kiosk"</h3>
                <div class="form-grid">
                    <input
                        type="text"
                        placeholder="Entrepreneur"
                        prop:value=move || entrepreneur.get()
                        on:input=move |ev| set_entrepreneur.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Village"
                        prop:value=move || village.get()
                        on:input=move |ev| set_village.set(event_target_value(&ev))
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
                <button type="submit" class="cta">"Open Kiosk"</button>
            </form>
        </div>
    }
}
