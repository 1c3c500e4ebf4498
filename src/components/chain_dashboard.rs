//! Chain Dashboard Component
//!
//! Payment ledger with the local-chain connection panel. Records can
//! be advanced through their lifecycle and pushed to the chain, or to
//! the demo ledger when no node answers.

use chain_client::short_address;
use leptos::prelude::*;

use super::{BarChart, SearchBar, StatCard, ValueFormat};
use crate::chain;
use crate::filters::{
    apply_filters, compare_transactions, sorted_by, SortDirection, STATUS_ALL,
};
use crate::models::{today_iso, ToastKind, TransactionRecord, TransactionStatus};
use crate::money::{format_inr, parse_amount};
use crate::records::use_stores;
use crate::stats::transaction_stats;
use crate::store::{push_toast, use_app_store, AppStateStoreFields};

const SORT_OPTIONS: [(&str, &str); 5] = [
    ("id", "Newest"),
    ("party", "Party"),
    ("type", "Type"),
    ("amount", "Amount"),
    ("date", "Date"),
];

const TRANSACTION_KINDS: [&str; 5] = [
    "Crop Payment",
    "Subsidy Disbursal",
    "Kiosk Commission",
    "Van Lease",
    "Input Purchase",
];

fn status_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Pending => "badge pending",
        TransactionStatus::InProgress => "badge transit",
        TransactionStatus::Completed => "badge completed",
    }
}

#[component]
pub fn ChainDashboard() -> impl IntoView {
    let ui = use_app_store();
    let transactions = use_stores().transactions;
    let records = transactions.signal();

    // First visit tries the local node once.
    if ui.chain().get_untracked().is_none() {
        chain::connect(ui);
    }

    let query = RwSignal::new(String::new());
    let status = RwSignal::new(STATUS_ALL);
    let sort_key = RwSignal::new("id");
    let direction = RwSignal::new(SortDirection::Ascending);

    let stats = Memo::new(move |_| transaction_stats(&records.get()));
    let visible = Memo::new(move |_| {
        let filtered = apply_filters(&records.get(), &query.get(), status.get());
        let key = sort_key.get();
        sorted_by(filtered, direction.get(), move |a, b| {
            compare_transactions(a, b, key)
        })
    });

    let statuses: Vec<&'static str> = std::iter::once(STATUS_ALL)
        .chain(TransactionStatus::ALL.iter().map(|s| s.as_str()))
        .collect();

    let (kind, set_kind) = signal(TRANSACTION_KINDS[0].to_string());
    let (party, set_party) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (occurred, set_occurred) = signal(today_iso());
    let (form_error, set_form_error) = signal(None::<String>);

    let add_record = {
        let store = transactions.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let party_v = party.get().trim().to_string();
            let amount_v = parse_amount(&amount.get());

            let invalid = if party_v.is_empty() {
                Some("Party is required")
            } else if amount_v <= 0.0 {
                Some("Amount must be a positive rupee value")
            } else {
                None
            };
            if let Some(msg) = invalid {
                set_form_error.set(Some(msg.to_string()));
                return;
            }
            set_form_error.set(None);

            let created = store.create(|id| TransactionRecord {
                id,
                kind: kind.get(),
                party: party_v.clone(),
                amount: amount_v,
                status: TransactionStatus::Pending,
                verified: false,
                tx_hash: None,
                occurred_on: occurred.get(),
            });
            push_toast(&ui, ToastKind::Success, format!("{} recorded", created.code()));
            set_party.set(String::new());
            set_amount.set(String::new());
            set_occurred.set(today_iso());
        }
    };

    view! {
        <div class="page dashboard">
            <h1>"Transparency Ledger"</h1>

            {move || match ui.chain().get() {
                Some(chain_status) => {
                    let badge = if chain_status.live {
                        view! { <span class="badge active">"Live chain"</span> }.into_any()
                    } else {
                        view! { <span class="badge maintenance">"Demo data"</span> }.into_any()
                    };
                    view! {
                        <div class="chain-panel">
                            {badge}
                            <span>{format!("Network {}", chain_status.network_id)}</span>
                            <span>{format!("{:.2} ETH available", chain_status.balance_eth)}</span>
                            <ul class="account-list">
                                {chain_status
                                    .accounts
                                    .iter()
                                    .map(|account| {
                                        view! { <li class="mono">{short_address(account)}</li> }
                                    })
                                    .collect_view()}
                            </ul>
                            <button class="row-action" on:click=move |_| chain::connect(ui)>
                                "Reconnect"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                None => view! {
                    <div class="chain-panel">
                        <span>"Connecting to local chain..."</span>
                    </div>
                }
                    .into_any(),
            }}

            <div class="stat-row">
                <StatCard
                    label="Transactions"
                    value=Signal::derive(move || stats.get().count.to_string())
                />
                <StatCard
                    label="Volume"
                    value=Signal::derive(move || format_inr(stats.get().volume))
                />
                <StatCard
                    label="Verified On Chain"
                    value=Signal::derive(move || stats.get().verified.to_string())
                />
            </div>

            <BarChart
                title="Transactions by status"
                data=Signal::derive(move || stats.get().by_status)
                format=ValueFormat::Count
            />

            <BarChart
                title="Volume by type"
                data=Signal::derive(move || stats.get().volume_by_kind)
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
                            <th>"Ref"</th>
                            <th>"Type"</th>
                            <th>"Party"</th>
                            <th>"Amount"</th>
                            <th>"Date"</th>
                            <th>"Status"</th>
                            <th>"Chain Record"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|t| t.id
                            children=move |t| {
                                let advance_btn = t.status.advance().map(|next| {
                                    let store = transactions.clone();
                                    let row = t.clone();
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
                                let verify_btn = (!t.verified).then(|| {
                                    let store = transactions.clone();
                                    let row = t.clone();
                                    view! {
                                        <button
                                            class="row-action"
                                            on:click=move |_| {
                                                chain::verify_transaction(
                                                    ui,
                                                    store.clone(),
                                                    row.clone(),
                                                );
                                            }
                                        >
                                            "Verify"
                                        </button>
                                    }
                                });
                                let record_btn = t.tx_hash.is_none().then(|| {
                                    let store = transactions.clone();
                                    let row = t.clone();
                                    view! {
                                        <button
                                            class="row-action"
                                            on:click=move |_| {
                                                chain::record_on_chain(
                                                    ui,
                                                    store.clone(),
                                                    row.clone(),
                                                );
                                            }
                                        >
                                            "Record on Chain"
                                        </button>
                                    }
                                });
                                let remove = {
                                    let store = transactions.clone();
                                    let id = t.id;
                                    let code = t.code();
                                    move |_| {
                                        store.remove(id);
                                        push_toast(&ui, ToastKind::Info, format!("{code} removed"));
                                    }
                                };
                                let chain_cell = t
                                    .tx_hash
                                    .as_deref()
                                    .map(short_address)
                                    .unwrap_or_default();
                                view! {
                                    <tr>
                                        <td class="mono">{t.code()}</td>
                                        <td>{t.kind.clone()}</td>
                                        <td>{t.party.clone()}</td>
                                        <td>{format_inr(t.amount)}</td>
                                        <td>{t.occurred_on.clone()}</td>
                                        <td>
                                            <span class=status_class(t.status)>
                                                {t.status.as_str()}
                                            </span>
                                        </td>
                                        <td class="mono">{chain_cell}</td>
                                        <td class="row-actions">
                                            {advance_btn}
                                            {verify_btn}
                                            {record_btn}
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
                        view! { <p class="empty-note">"No transactions match the current filters"</p> }
                    })
                }}
            </div>

            <form class="record-form" on:submit=add_record>
                <h3>"Record a payment"</h3>
                <div class="form-grid">
                    <select on:change=move |ev| set_kind.set(event_target_value(&ev))>
                        {TRANSACTION_KINDS
                            .iter()
                            .copied()
                            .map(|option| {
                                view! {
                                    <option value=option prop:selected=move || kind.get() == option>
                                        {option}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        placeholder="Party"
                        prop:value=move || party.get()
                        on:input=move |ev| set_party.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Amount (₹)"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=move || occurred.get()
                        on:input=move |ev| set_occurred.set(event_target_value(&ev))
                    />
                </div>
                {move || form_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" class="cta">"Record"</button>
            </form>
        </div>
    }
}
