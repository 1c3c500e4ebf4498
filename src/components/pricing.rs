//! Pricing Page Component
//!
//! Static plan cards for the three operator tiers.

use leptos::prelude::*;

use crate::routes::Page;
use crate::store::{navigate, use_app_store};

struct Tier {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "Kiosk Partner",
        price: "₹999",
        period: "per month",
        blurb: "For village entrepreneurs running a single pickup point.",
        features: &[
            "Parcel locker and pickup desk",
            "Commission on every sale",
            "Inventory restock by van route",
            "Ledger record of all payouts",
        ],
        featured: false,
    },
    Tier {
        name: "Growth",
        price: "₹4,999",
        period: "per month",
        blurb: "For van owners and co-ops covering several villages.",
        features: &[
            "Everything in Kiosk Partner",
            "Route planning for retail vans",
            "Priority drone slots in monsoon",
            "Dashboards for stock and revenue",
            "Working-capital advances",
        ],
        featured: true,
    },
    Tier {
        name: "District",
        price: "Custom",
        period: "annual contract",
        blurb: "For administrations and NGOs contracting whole blocks.",
        features: &[
            "Dedicated hub and drone fleet",
            "Health-supply cold chain",
            "Open data feeds for auditors",
            "On-ground training programme",
        ],
        featured: false,
    },
];

#[component]
pub fn PricingPage() -> impl IntoView {
    let ui = use_app_store();

    view! {
        <div class="page pricing">
            <h1>"Pricing"</h1>
            <p class="page-sub">"Plans that grow with your routes. No lock-in, leave any month."</p>
            <div class="tier-grid">
                {TIERS
                    .iter()
                    .map(|tier| {
                        let card_class = if tier.featured {
                            "tier-card featured"
                        } else {
                            "tier-card"
                        };
                        view! {
                            <div class=card_class>
                                <h3>{tier.name}</h3>
                                <div class="tier-price">
                                    <span class="amount">{tier.price}</span>
                                    <span class="period">{tier.period}</span>
                                </div>
                                <p class="tier-blurb">{tier.blurb}</p>
                                <ul>
                                    {tier
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{*feature}</li> })
                                        .collect_view()}
                                </ul>
                                <button class="cta" on:click=move |_| navigate(&ui, Page::Register)>
                                    "Start a pilot"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="pricing-note">
                "District contracts include a revenue-share option for gram panchayats. "
                <button class="inline-link" on:click=move |_| navigate(&ui, Page::Investors)>
                    "Talk to us"
                </button>
            </p>
        </div>
    }
}
