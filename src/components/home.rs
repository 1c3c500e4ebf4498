//! Home Page Component
//!
//! Marketing landing page: hero, rotating story carousel, feature grid
//! and a live impact strip fed from the stores.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::money::format_inr;
use crate::records::use_stores;
use crate::routes::Page;
use crate::stats::{delivery_stats, outlet_stats};
use crate::store::{navigate, use_app_store, AppStateStoreFields};

const SLIDE_MILLIS: u32 = 6_000;

const SLIDES: [(&str, &str); 3] = [
    (
        "Monsoon-proof medicine runs",
        "When the Velhe ghat road washed out in July, drones kept the \
         primary health centre stocked for eleven straight days.",
    ),
    (
        "A shop that comes to the village",
        "Sunita Deshmukh's retail van now serves 510 households across \
         Satara district, twice the reach of her old fixed stall.",
    ),
    (
        "Every rupee on the record",
        "Farmer co-ops see their crop payments land on a public ledger \
         the same day the produce leaves the village.",
    ),
];

const FEATURES: [(&str, &str); 4] = [
    (
        "Drone Delivery",
        "Sub-5kg cargo drones clear in an hour what hill roads take a day to move.",
    ),
    (
        "Mobile Retail Vans",
        "Entrepreneur-owned vans carry groceries, farm inputs and medicines on fixed weekly routes.",
    ),
    (
        "Village Kiosks",
        "Staffed pickup points with cold storage, bill payment and parcel lockers.",
    ),
    (
        "Transparency Ledger",
        "Payments to farmers and operators are mirrored to a public chain anyone can audit.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    ("Order", "Villagers or kiosk operators place orders by phone or app."),
    ("Dispatch", "The nearest hub routes each parcel to a drone, van or kiosk leg."),
    ("Deliver", "Proof of delivery and payment land on the ledger the same day."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = use_app_store();
    let stores = use_stores();

    let (slide, set_slide) = signal(0usize);
    let ticker = StoredValue::new_local(Some(Interval::new(SLIDE_MILLIS, move || {
        set_slide.update(|i| *i = (*i + 1) % SLIDES.len());
    })));
    on_cleanup(move || ticker.set_value(None));

    let deliveries = stores.deliveries.signal();
    let vans = stores.vans.signal();
    let kiosks = stores.kiosks.signal();
    let impact = Memo::new(move |_| {
        let flights = delivery_stats(&deliveries.get());
        let van_reach = outlet_stats(&vans.get());
        let kiosk_reach = outlet_stats(&kiosks.get());
        (
            flights.total,
            van_reach.households + kiosk_reach.households,
            flights.co2_saved_kg,
            flights.cost_saved,
        )
    });

    let start = move |_| {
        let target = if ui.session().get_untracked().is_some() {
            Page::DroneDashboard
        } else {
            Page::Register
        };
        navigate(&ui, target);
    };

    view! {
        <div class="page home">
            <section class="hero">
                <h1>"The last-mile bridge for rural India"</h1>
                <p class="hero-sub">
                    "GramSetu links hill villages to markets with cargo drones, \
                     entrepreneur-run retail vans and kiosk pickup points, with \
                     every payment mirrored to an open ledger."
                </p>
                <div class="hero-actions">
                    <button class="cta" on:click=start>"Get Started"</button>
                    <button class="cta ghost" on:click=move |_| navigate(&ui, Page::Investors)>
                        "For Investors"
                    </button>
                </div>
            </section>

            <section class="carousel">
                {move || {
                    let (title, text) = SLIDES[slide.get() % SLIDES.len()];
                    view! {
                        <div class="slide">
                            <h3>{title}</h3>
                            <p>{text}</p>
                        </div>
                    }
                }}
                <div class="carousel-dots">
                    {SLIDES
                        .iter()
                        .enumerate()
                        .map(|(i, _)| {
                            let dot_class = move || {
                                if slide.get() == i { "dot active" } else { "dot" }
                            };
                            view! {
                                <button class=dot_class on:click=move |_| set_slide.set(i)></button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="impact-strip">
                <div class="impact-item">
                    <span class="impact-value">{move || impact.get().0.to_string()}</span>
                    <span class="impact-label">"Drone deliveries"</span>
                </div>
                <div class="impact-item">
                    <span class="impact-value">{move || impact.get().1.to_string()}</span>
                    <span class="impact-label">"Households reached"</span>
                </div>
                <div class="impact-item">
                    <span class="impact-value">
                        {move || format!("{:.0} kg", impact.get().2)}
                    </span>
                    <span class="impact-label">"CO2 avoided"</span>
                </div>
                <div class="impact-item">
                    <span class="impact-value">{move || format_inr(impact.get().3)}</span>
                    <span class="impact-label">"Logistics cost saved"</span>
                </div>
            </section>

            <section class="features">
                <h2>"One network, three last miles"</h2>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, text)| {
                            view! {
                                <div class="feature-card">
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="how-it-works">
                <h2>"How it works"</h2>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .map(|(title, text)| {
                            view! {
                                <li>
                                    <h4>{*title}</h4>
                                    <p>{*text}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>
        </div>
    }
}
