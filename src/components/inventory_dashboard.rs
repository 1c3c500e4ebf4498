//! Inventory Dashboard Component
//!
//! Warehouse stock list with reorder banding, category chart, filters
//! and the new-item form.

use leptos::prelude::*;

use super::{BarChart, SearchBar, StatCard, ValueFormat};
use crate::filters::{
    apply_filters, compare_inventory, sorted_by, SortDirection, STATUS_ALL,
};
use crate::models::{InventoryItem, ToastKind};
use crate::money::{format_inr, parse_amount};
use crate::records::use_stores;
use crate::stats::{inventory_stats, StockLevel};
use crate::store::{push_toast, use_app_store};

const SORT_OPTIONS: [(&str, &str); 6] = [
    ("id", "Newest"),
    ("name", "Name"),
    ("category", "Category"),
    ("quantity", "Quantity"),
    ("value", "Stock value"),
    ("warehouse", "Warehouse"),
];

#[component]
pub fn InventoryDashboard() -> impl IntoView {
    let ui = use_app_store();
    let inventory = use_stores().inventory;
    let records = inventory.signal();

    let query = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL);
    let sort_key = RwSignal::new("id");
    let direction = RwSignal::new(SortDirection::Ascending);

    let stats = Memo::new(move |_| inventory_stats(&records.get()));
    let visible = Memo::new(move |_| {
        let filtered = apply_filters(&records.get(), &query.get(), status.get());
        let key = sort_key.get();
        sorted_by(filtered, direction.get(), move |a, b| {
            compare_inventory(a, b, key)
        })
    });

    let statuses: Vec<&'static str> = std::iter::once(STATUS_ALL)
        .chain(StockLevel::ALL.iter().map(|level| level.as_str()))
        .collect();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (reorder, set_reorder) = signal(String::new());
    let (warehouse, set_warehouse) = signal(String::new());
    let (unit_price, set_unit_price) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<String>);

    let add_item = {
        let store = inventory.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let name_v = name.get().trim().to_string();
            let category_v = category.get().trim().to_string();
            let warehouse_v = warehouse.get().trim().to_string();
            let quantity_v: Option<u32> = quantity.get().trim().parse().ok();
            let reorder_v: Option<u32> = reorder.get().trim().parse().ok();
            let price_v = parse_amount(&unit_price.get());

            let invalid = if name_v.is_empty() {
                Some("Item name is required")
            } else if category_v.is_empty() {
                Some("Category is required")
            } else if warehouse_v.is_empty() {
                Some("Warehouse is required")
            } else if quantity_v.is_none() {
                Some("Quantity must be a whole number")
            } else if reorder_v.is_none() || reorder_v == Some(0) {
                Some("Reorder point must be at least 1")
            } else if price_v <= 0.0 {
                Some("Unit price is required")
            } else {
                None
            };
            if let Some(msg) = invalid {
                set_form_error.set(Some(msg.to_string()));
                return;
            }
            set_form_error.set(None);

            let created = store.create(|id| InventoryItem {
                id,
                name: name_v.clone(),
                category: category_v.clone(),
                quantity: quantity_v.unwrap_or(0),
                reorder_point: reorder_v.unwrap_or(1),
                warehouse: warehouse_v.clone(),
                unit_price: price_v,
            });
            push_toast(&ui, ToastKind::Success, format!("{} added", created.code()));
            set_name.set(String::new());
            set_category.set(String::new());
            set_quantity.set(String::new());
            set_reorder.set(String::new());
            set_warehouse.set(String::new());
            set_unit_price.set(String::new());
        }
    };

    view! {
        <div class="page dashboard">
            <h1>"Inventory"</h1>
            <div class="stat-row">
                <StatCard
                    label="Line Items"
                    value=Signal::derive(move || stats.get().line_items.to_string())
                />
                <StatCard
                    label="Units in Stock"
                    value=Signal::derive(move || stats.get().units.to_string())
                />
                <StatCard
                    label="Stock Value"
                    value=Signal::derive(move || format_inr(stats.get().stock_value))
                />
                <StatCard
                    label="Critical"
                    value=Signal::derive(move || stats.get().critical.to_string())
                    hint="at or below half the reorder point"
                />
                <StatCard
                    label="Low Stock"
                    value=Signal::derive(move || stats.get().low.to_string())
                />
            </div>

            <BarChart
                title="Units by category"
                data=Signal::derive(move || stats.get().by_category)
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
                            <th>"Item"</th>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Qty"</th>
                            <th>"Reorder At"</th>
                            <th>"Warehouse"</th>
                            <th>"Unit Price"</th>
                            <th>"Stock Value"</th>
                            <th>"Level"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|item| item.id
                            children=move |item| {
                                let level = StockLevel::of(&item);
                                let restock = {
                                    let store = inventory.clone();
                                    let row = item.clone();
                                    move |_| {
                                        let mut updated = row.clone();
                                        updated.quantity = updated.restocked();
                                        let note = format!(
                                            "{} restocked (+{} units)",
                                            updated.code(),
                                            updated.reorder_point
                                        );
                                        store.update(updated);
                                        push_toast(&ui, ToastKind::Success, note);
                                    }
                                };
                                let remove = {
                                    let store = inventory.clone();
                                    let id = item.id;
                                    let code = item.code();
                                    move |_| {
                                        store.remove(id);
                                        push_toast(&ui, ToastKind::Info, format!("{code} removed"));
                                    }
                                };
                                view! {
                                    <tr>
                                        <td class="mono">{item.code()}</td>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.category.clone()}</td>
                                        <td>{item.quantity}</td>
                                        <td>{item.reorder_point}</td>
                                        <td>{item.warehouse.clone()}</td>
                                        <td>{format_inr(item.unit_price)}</td>
                                        <td>{format_inr(item.stock_value())}</td>
                                        <td>
                                            <span class=format!("badge {}", level.css_class())>
                                                {level.as_str()}
                                            </span>
                                        </td>
                                        <td class="row-actions">
                                            <button class="row-action" on:click=restock>
                                                "Restock"
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
                        view! { <p class="empty-note">"No items match the current filters"</p> }
                    })
                }}
            </div>

            <form class="record-form" on:submit=add_item>
                <h3>"Add an item"</h3>
                <div class="form-grid">
                    <input
                        type="text"
                        placeholder="Item name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Category"
                        prop:value=move || category.get()
                        on:input=move |ev| set_category.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        placeholder="Quantity"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="1"
                        placeholder="Reorder point"
                        prop:value=move || reorder.get()
                        on:input=move |ev| set_reorder.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Warehouse"
                        prop:value=move || warehouse.get()
                        on:input=move |ev| set_warehouse.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Unit price (₹)"
                        prop:value=move || unit_price.get()
                        on:input=move |ev| set_unit_price.set(event_target_value(&ev))
                    />
                </div>
                {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="cta">"Add Item"</button>
            </form>
        </div>
    }
}
