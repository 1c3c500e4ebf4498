//! Investors Page Component
//!
//! Traction numbers pulled live from the stores, plus the pilot
//! timeline and a contact block.

use leptos::prelude::*;

use crate::money::format_inr;
use crate::records::use_stores;
use crate::stats::{delivery_stats, outlet_stats};

const MILESTONES: [(&str, &str); 4] = [
    (
        "2024 Q3",
        "First two kiosks open in Velhe block with a single shared van route.",
    ),
    (
        "2025 Q2",
        "DGCA clearance for beyond-line-of-sight cargo flights across three corridors.",
    ),
    (
        "2026 Q1",
        "Payments ledger goes live; farmer co-ops audit their own disbursals.",
    ),
    (
        "2026 Q3",
        "Pilot spans Pune, Satara and Nashik districts with monsoon-season uptime above 95%.",
    ),
];

#[component]
pub fn InvestorsPage() -> impl IntoView {
    let stores = use_stores();
    let deliveries = stores.deliveries.signal();
    let vans = stores.vans.signal();
    let kiosks = stores.kiosks.signal();

    let traction = Memo::new(move |_| {
        let flights = delivery_stats(&deliveries.get());
        let van_net = outlet_stats(&vans.get());
        let kiosk_net = outlet_stats(&kiosks.get());
        let areas = van_net.revenue_by_area.groups.len() + kiosk_net.revenue_by_area.groups.len();
        (
            areas,
            van_net.households + kiosk_net.households,
            van_net.jobs + kiosk_net.jobs,
            van_net.monthly_revenue + kiosk_net.monthly_revenue,
            flights.cost_saved,
        )
    });

    view! {
        <div class="page investors">
            <h1>"Investors"</h1>
            <p class="page-sub">
                "Rural India moves ₹35 lakh crore of goods a year over roads that \
                 close every monsoon. We are building the network that does not."
            </p>

            <section class="traction-strip">
                <div class="impact-item">
                    <span class="impact-value">{move || traction.get().0.to_string()}</span>
                    <span class="impact-label">"Areas served"</span>
                </div>
                <div class="impact-item">
                    <span class="impact-value">{move || traction.get().1.to_string()}</span>
                    <span class="impact-label">"Households"</span>
                </div>
                <div class="impact-item">
                    <span class="impact-value">{move || traction.get().2.to_string()}</span>
                    <span class="impact-label">"Local jobs"</span>
                </div>
                <div class="impact-item">
                    <span class="impact-value">{move || format_inr(traction.get().3)}</span>
                    <span class="impact-label">"Network revenue / month"</span>
                </div>
                <div class="impact-item">
                    <span class="impact-value">{move || format_inr(traction.get().4)}</span>
                    <span class="impact-label">"Logistics cost saved"</span>
                </div>
            </section>

            <section class="thesis">
                <h2>"Why now"</h2>
                <p>
                    "Drone corridors are licensed, UPI reaches every kirana store, and \
                     village entrepreneurs already run the counters. What is missing is \
                     the operating layer that ties flights, van routes and kiosks into \
                     one auditable network. That layer is GramSetu."
                </p>
            </section>

            <section class="milestones">
                <h2>"Pilot timeline"</h2>
                <ul class="timeline">
                    {MILESTONES
                        .iter()
                        .map(|(when, what)| {
                            view! {
                                <li>
                                    <span class="timeline-when">{*when}</span>
                                    <span class="timeline-what">{*what}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="contact">
                <h2>"Data room"</h2>
                <p>
                    "Series A opens this quarter. For the full operations dataset and \
                     unit economics, write to "
                    <a href="mailto:invest@gramsetu.in">"invest@gramsetu.in"</a>
                    "."
                </p>
            </section>
        </div>
    }
}
