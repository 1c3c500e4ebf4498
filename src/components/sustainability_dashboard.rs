//! Sustainability Dashboard Component
//!
//! Environmental view over the delivery records: totals, per-village
//! chart and a per-flight breakdown. Read-only; edits happen on the
//! drone dashboard.

use leptos::prelude::*;

use super::{BarChart, StatCard, ValueFormat};
use crate::models::Delivery;
use crate::money::format_inr;
use crate::records::use_stores;
use crate::stats::sustainability_stats;

#[component]
pub fn SustainabilityDashboard() -> impl IntoView {
    let records = use_stores().deliveries.signal();
    let stats = Memo::new(move |_| sustainability_stats(&records.get()));
    let rows = Memo::new(move |_| records.get());

    view! {
        <div class="page dashboard">
            <h1>"Sustainability"</h1>
            <div class="stat-row">
                <StatCard
                    label="CO2 Avoided"
                    value=Signal::derive(move || format!("{:.1} kg", stats.get().co2_saved_kg))
                    hint="vs road transport"
                />
                <StatCard
                    label="Avg per Flight"
                    value=Signal::derive(move || {
                        format!("{:.1} kg", stats.get().avg_co2_per_flight_kg)
                    })
                />
                <StatCard
                    label="Road Hours Saved"
                    value=Signal::derive(move || format!("{:.1} h", stats.get().hours_saved))
                />
                <StatCard
                    label="Cost Saved"
                    value=Signal::derive(move || format_inr(stats.get().cost_saved))
                />
                <StatCard
                    label="Tree Years"
                    value=Signal::derive(move || format!("{:.1}", stats.get().tree_years))
                    hint="equivalent annual absorption"
                />
            </div>

            <BarChart
                title="CO2 avoided by destination"
                data=Signal::derive(move || stats.get().co2_by_destination)
                format=ValueFormat::Kilograms
            />

            <div class="table-wrap">
                <table>
                    <thead>
                        <tr>
                            <th>"Flight"</th>
                            <th>"Destination"</th>
                            <th>"Status"</th>
                            <th>"CO2 Saved"</th>
                            <th>"Hours Saved"</th>
                            <th>"Cost Saved"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|d| d.id
                            children=|d: Delivery| {
                                view! {
                                    <tr>
                                        <td class="mono">{d.code()}</td>
                                        <td>{d.destination.clone()}</td>
                                        <td>{d.status.as_str()}</td>
                                        <td>{format!("{:.1} kg", d.co2_saved_kg())}</td>
                                        <td>
                                            {format!(
                                                "{:.1} h",
                                                d.traditional_hours - d.drone_hours
                                            )}
                                        </td>
                                        <td>{format_inr(d.cost_saved())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                {move || {
                    rows.get().is_empty().then(|| {
                        view! { <p class="empty-note">"Schedule flights to see their impact here"</p> }
                    })
                }}
            </div>

            <p class="method-note">
                "Figures compare each drone flight with the road trip it replaced. \
                 Tree years convert avoided CO2 at 21 kg per tree per year."
            </p>
        </div>
    }
}
