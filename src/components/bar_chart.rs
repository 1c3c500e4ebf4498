//! Bar Chart Component
//!
//! Horizontal bars for a [`Distribution`], one row per group. Bar
//! widths come from the precomputed group fractions, so an empty or
//! all-zero distribution renders flat instead of dividing by zero.

use leptos::prelude::*;

use crate::money::format_inr;
use crate::stats::Distribution;

/// How a group value is printed next to its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Count,
    Rupees,
    Kilograms,
}

impl ValueFormat {
    pub fn render(&self, value: f64) -> String {
        match self {
            ValueFormat::Count => format!("{value:.0}"),
            ValueFormat::Rupees => format_inr(value),
            ValueFormat::Kilograms => format!("{value:.1} kg"),
        }
    }
}

#[component]
pub fn BarChart(
    title: &'static str,
    #[prop(into)] data: Signal<Distribution>,
    format: ValueFormat,
) -> impl IntoView {
    view! {
        <div class="chart-panel">
            <h3>{title}</h3>
            <Show
                when=move || !data.get().groups.is_empty()
                fallback=|| view! { <p class="chart-empty">"No data yet"</p> }
            >
                <For
                    each=move || data.get().groups
                    key=|group| group.label.clone()
                    children=move |group| {
                        // 2% floor keeps zero-value bars visible
                        let width =
                            format!("width: {:.1}%", (group.percent * 100.0).max(2.0));
                        view! {
                            <div class="chart-row">
                                <span class="chart-row-label">{group.label.clone()}</span>
                                <div class="chart-track">
                                    <div class="chart-bar" style=width></div>
                                </div>
                                <span class="chart-row-value">{format.render(group.value)}</span>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
