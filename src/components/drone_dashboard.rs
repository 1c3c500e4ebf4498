//! Drone Dashboard Component
//!
//! Flight list with savings stats, status chart, filters and the
//! scheduling form.

use leptos::prelude::*;

use super::{BarChart, SearchBar, StatCard, ValueFormat};
use crate::filters::{
    apply_filters, compare_deliveries, sorted_by, SortDirection, STATUS_ALL,
};
use crate::models::{today_iso, Delivery, DeliveryStatus, ToastKind, Waypoint};
use crate::money::{format_inr, parse_amount};
use crate::records::use_stores;
use crate::stats::delivery_stats;
use crate::store::{push_toast, use_app_store};

const SORT_OPTIONS: [(&str, &str); 6] = [
    ("id", "Newest"),
    ("origin", "Origin"),
    ("destination", "Destination"),
    ("packages", "Packages"),
    ("cost", "Drone cost"),
    ("date", "Scheduled date"),
];

// Per-package estimates applied to newly scheduled flights.
const DRONE_HOURS_BASE: f64 = 0.5;
const DRONE_HOURS_PER_PACKAGE: f64 = 0.05;
const TRUCK_HOURS_BASE: f64 = 3.0;
const TRUCK_HOURS_PER_PACKAGE: f64 = 0.4;
const DRONE_CO2_PER_PACKAGE: f64 = 0.2;
const TRUCK_CO2_PER_PACKAGE: f64 = 1.6;

fn status_class(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Pending => "badge pending",
        DeliveryStatus::InTransit => "badge transit",
        DeliveryStatus::Completed => "badge completed",
    }
}

#[component]
pub fn DroneDashboard() -> impl IntoView {
    let ui = use_app_store();
    let deliveries = use_stores().deliveries;
    let records = deliveries.signal();

    let query = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL);
    let sort_key = RwSignal::new("id");
    let direction = RwSignal::new(SortDirection::Ascending);

    let stats = Memo::new(move |_| delivery_stats(&records.get()));
    let visible = Memo::new(move |_| {
        let filtered = apply_filters(&records.get(), &query.get(), status.get());
        let key = sort_key.get();
        sorted_by(filtered, direction.get(), move |a, b| {
            compare_deliveries(a, b, key)
        })
    });

    let statuses: Vec<&'static str> = std::iter::once(STATUS_ALL)
        .chain(DeliveryStatus::ALL.iter().map(|s| s.as_str()))
        .collect();

    let (origin, set_origin) = signal(String::new());
    let (destination, set_destination) = signal(String::new());
    let (packages, set_packages) = signal(String::new());
    let (drone_cost, set_drone_cost) = signal(String::new());
    let (truck_cost, set_truck_cost) = signal(String::new());
    let (scheduled, set_scheduled) = signal(today_iso());
    let (form_error, set_form_error) = signal(None::<String>);

    let schedule = {
        let store = deliveries.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let origin_v = origin.get().trim().to_string();
            let destination_v = destination.get().trim().to_string();
            let packages_v: u32 = packages.get().trim().parse().unwrap_or(0);
            let drone_cost_v = parse_amount(&drone_cost.get());
            let truck_cost_v = parse_amount(&truck_cost.get());

            let invalid = if origin_v.is_empty() {
                Some("Origin is required")
            } else if destination_v.is_empty() {
                Some("Destination is required")
            } else if packages_v == 0 {
                Some("Packages must be at least 1")
            } else if drone_cost_v <= 0.0 || truck_cost_v <= 0.0 {
                Some("Both cost estimates are required")
            } else {
                None
            };
            if let Some(msg) = invalid {
                set_form_error.set(Some(msg.to_string()));
                return;
            }
            set_form_error.set(None);

            let pk = f64::from(packages_v);
            let created = store.create(|id| Delivery {
                id,
                origin: origin_v.clone(),
                destination: destination_v.clone(),
                status: DeliveryStatus::Pending,
                packages: packages_v,
                drone_cost: drone_cost_v,
                traditional_cost: truck_cost_v,
                drone_hours: DRONE_HOURS_BASE + DRONE_HOURS_PER_PACKAGE * pk,
                traditional_hours: TRUCK_HOURS_BASE + TRUCK_HOURS_PER_PACKAGE * pk,
                drone_co2_kg: DRONE_CO2_PER_PACKAGE * pk,
                traditional_co2_kg: TRUCK_CO2_PER_PACKAGE * pk,
                route: vec![
                    Waypoint {
                        name: origin_v.clone(),
                        lat: None,
                        lng: None,
                    },
                    Waypoint {
                        name: destination_v.clone(),
                        lat: None,
                        lng: None,
                    },
                ],
                scheduled_for: scheduled.get(),
            });
            push_toast(&ui, ToastKind::Success, format!("{} scheduled", created.code()));
            set_origin.set(String::new());
            set_destination.set(String::new());
            set_packages.set(String::new());
            set_drone_cost.set(String::new());
            set_truck_cost.set(String::new());
            set_scheduled.set(today_iso());
        }
    };

    view! {
        <div class="page dashboard">
            <h1>"Drone Deliveries"</h1>
            <div class="stat-row">
                <StatCard label="Flights" value=Signal::derive(move || stats.get().total.to_string()) />
                <StatCard
                    label="In Transit"
                    value=Signal::derive(move || stats.get().in_flight.to_string())
                />
                <StatCard
                    label="Packages Moved"
                    value=Signal::derive(move || stats.get().packages.to_string())
                />
                <StatCard
                    label="Cost Saved"
                    value=Signal::derive(move || format_inr(stats.get().cost_saved))
                    hint="vs road transport"
                />
                <StatCard
                    label="Hours Saved"
                    value=Signal::derive(move || format!("{:.1} h", stats.get().hours_saved))
                />
                <StatCard
                    label="CO2 Avoided"
                    value=Signal::derive(move || format!("{:.1} kg", stats.get().co2_saved_kg))
                />
            </div>

            <BarChart
                title="Flights by status"
                data=Signal::derive(move || stats.get().by_status)
                format=ValueFormat::Count
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
                            <th>"Flight"</th>
                            <th>"Origin"</th>
                            <th>"Destination"</th>
                            <th>"Stops"</th>
                            <th>"Packages"</th>
                            <th>"Drone Cost"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|d| d.id
                            children=move |d| {
                                let advance_btn = d.status.advance().map(|next| {
                                    let store = deliveries.clone();
                                    let row = d.clone();
                                    view! {
                                        <button
                                            class="row-action"
                                            on:click=move |_| {
                                                let mut updated = row.clone();
                                                updated.status = next;
                                                let note = format!(
                                                    "{} is now {}",
                                                    updated.code(),
                                                    next.as_str()
                                                );
                                                store.update(updated);
                                                push_toast(&ui, ToastKind::Success, note);
                                            }
                                        >
                                            "Advance"
                                        </button>
                                    }
                                });
                                let remove = {
                                    let store = deliveries.clone();
                                    let id = d.id;
                                    let code = d.code();
                                    move |_| {
                                        store.remove(id);
                                        push_toast(&ui, ToastKind::Info, format!("{code} removed"));
                                    }
                                };
                                view! {
                                    <tr>
                                        <td class="mono">{d.code()}</td>
                                        <td>{d.origin.clone()}</td>
                                        <td>{d.destination.clone()}</td>
                                        <td>{d.route.len()}</td>
                                        <td>{d.packages}</td>
                                        <td>{format_inr(d.drone_cost)}</td>
                                        <td>{d.scheduled_for.clone()}</td>
                                        <td>
                                            <span class=status_class(d.status)>
                                                {d.status.as_str()}
                                            </span>
                                        </td>
                                        <td class="row-actions">
                                            {advance_btn}
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
                        view! { <p class="empty-note">"No flights match the current filters"</p> }
                    })
                }}
            </div>

            <form class="record-form" on:submit=schedule>
                <h3>"Schedule a flight"</h3>
                <div class="form-grid">
                    <input
                        type="text"
                        placeholder="Origin hub"
                        prop:value=move || origin.get()
                        on:input=move |ev| set_origin.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Destination village"
                        prop:value=move || destination.get()
                        on:input=move |ev| set_destination.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="1"
                        placeholder="Packages"
                        prop:value=move || packages.get()
                        on:input=move |ev| set_packages.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Drone cost (₹)"
                        prop:value=move || drone_cost.get()
                        on:input=move |ev| set_drone_cost.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Road cost (₹)"
                        prop:value=move || truck_cost.get()
                        on:input=move |ev| set_truck_cost.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=move || scheduled.get()
                        on:input=move |ev| set_scheduled.set(event_target_value(&ev))
                    />
                </div>
                {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="cta">"Schedule"</button>
            </form>
        </div>
    }
}
