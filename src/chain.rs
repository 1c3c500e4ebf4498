//! Chain Connector
//!
//! Glue between the ledger screen and a local development chain. One
//! connection attempt per request: success marks the status live,
//! failure swaps in the bundled demo status with a toast. Verifying a
//! record is a cosmetic flag flip; recording it writes a zero-value
//! marker transfer when live and a deterministic demo hash otherwise.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chain_client::{ChainClient, ChainInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{ChainStatus, RecordId, ToastKind, TransactionRecord};
use crate::records::RecordStore;
use crate::store::{push_toast, AppStateStoreFields, AppStore};

/// Ganache default RPC endpoint.
pub const CHAIN_ENDPOINT: &str = "http://127.0.0.1:7545";

/// Status shown when no local chain answers: the stock Ganache network
/// id and its first deterministic accounts.
pub fn mock_status() -> ChainStatus {
    ChainStatus {
        network_id: "5777".to_string(),
        accounts: vec![
            "0x90F8bf6A479f320ead074411a4B0e7944Ea8c9C1".to_string(),
            "0xFFcf8FDEE72ac11b5c542428B35EEF5769C409f0".to_string(),
            "0x22d491Bde2303f2f43325b2108D26f1eAbA1e32b".to_string(),
        ],
        balance_eth: 100.0,
        live: false,
    }
}

fn live_status(info: ChainInfo) -> ChainStatus {
    ChainStatus {
        network_id: info.network_id,
        accounts: info.accounts,
        balance_eth: info.balance_eth,
        live: true,
    }
}

/// Tries the local chain once and stores whichever status came back.
pub fn connect(ui: AppStore) {
    spawn_local(async move {
        let client = ChainClient::new(CHAIN_ENDPOINT);
        match client.connect().await {
            Ok(info) => {
                let network_id = info.network_id.clone();
                ui.chain().set(Some(live_status(info)));
                push_toast(
                    &ui,
                    ToastKind::Success,
                    format!("Connected to local chain (network {network_id})"),
                );
            }
            Err(err) => {
                log::warn!("[chain] connect failed: {err}");
                ui.chain().set(Some(mock_status()));
                push_toast(
                    &ui,
                    ToastKind::Info,
                    "Local chain not reachable, showing demo ledger data",
                );
            }
        }
    });
}

/// Flips the verified flag. Nothing is checked against anything; the
/// flag is bookkeeping for the demo ledger.
pub fn verify_transaction(
    ui: AppStore,
    transactions: RecordStore<TransactionRecord>,
    record: TransactionRecord,
) {
    if record.verified {
        return;
    }
    let code = record.code();
    let mut updated = record;
    updated.verified = true;
    transactions.update(updated);
    push_toast(&ui, ToastKind::Success, format!("{code} marked verified"));
}

/// Stamps a transaction with a chain record. Live chain: a zero-value
/// transfer between the first two accounts supplies the hash, and a
/// send failure leaves the record untouched. Demo mode: the hash is
/// generated locally.
pub fn record_on_chain(
    ui: AppStore,
    transactions: RecordStore<TransactionRecord>,
    record: TransactionRecord,
) {
    if record.tx_hash.is_some() {
        return;
    }
    let id = record.id;
    match ui.chain().get_untracked() {
        Some(status) if status.live && status.accounts.len() >= 2 => {
            let from = status.accounts[0].clone();
            let to = status.accounts[1].clone();
            spawn_local(async move {
                let client = ChainClient::new(CHAIN_ENDPOINT);
                match client.send_transaction(&from, &to, 0.0).await {
                    Ok(hash) => {
                        if stamp(&transactions, id, hash) {
                            push_toast(
                                &ui,
                                ToastKind::Success,
                                "Transaction recorded on local chain",
                            );
                        }
                    }
                    Err(err) => {
                        log::warn!("[chain] send failed: {err}");
                        push_toast(
                            &ui,
                            ToastKind::Error,
                            format!("Could not record on chain: {err}"),
                        );
                    }
                }
            });
        }
        _ => {
            let hash = transactions
                .signal()
                .with_untracked(|list| list.iter().find(|t| t.id == id).map(demo_hash));
            if let Some(hash) = hash {
                stamp(&transactions, id, hash);
                push_toast(&ui, ToastKind::Info, "Stamped with a demo ledger hash");
            }
        }
    }
}

/// Copies the hash onto the record as it stands now and marks it
/// verified. The row captured at click time may be stale by the time a
/// send resolves; only these two fields change. Returns false when the
/// record was deleted in the meantime.
fn stamp(transactions: &RecordStore<TransactionRecord>, id: RecordId, hash: String) -> bool {
    let current = transactions
        .signal()
        .with_untracked(|list| list.iter().find(|t| t.id == id).cloned());
    match current {
        Some(mut record) => {
            record.verified = true;
            record.tx_hash = Some(hash);
            transactions.update(record);
            true
        }
        None => {
            log::debug!("[chain] TXN-{id:03} gone before its stamp landed");
            false
        }
    }
}

/// Stable pseudo hash for demo-mode verification, keyed on the record.
fn demo_hash(record: &TransactionRecord) -> String {
    let mut front = DefaultHasher::new();
    (record.id, record.party.as_str()).hash(&mut front);
    let mut back = DefaultHasher::new();
    (record.party.as_str(), record.occurred_on.as_str(), record.id).hash(&mut back);
    format!("0x{:016x}{:016x}", front.finish(), back.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_mock_status_mirrors_stock_ganache() {
        let status = mock_status();
        assert_eq!(status.network_id, "5777");
        assert_eq!(status.accounts.len(), 3);
        assert!(status.accounts.iter().all(|a| a.starts_with("0x")));
        assert_eq!(status.balance_eth, 100.0);
        assert!(!status.live);
    }

    #[test]
    fn test_live_status_keeps_rpc_fields() {
        let info = ChainInfo {
            network_id: "1337".to_string(),
            accounts: vec!["0xabc".to_string()],
            balance_eth: 42.5,
        };
        let status = live_status(info);
        assert!(status.live);
        assert_eq!(status.network_id, "1337");
        assert_eq!(status.balance_eth, 42.5);
    }

    #[test]
    fn test_demo_hashes_are_stable_and_distinct() {
        let records = seed::transactions();
        let a = demo_hash(&records[2]);
        assert_eq!(a, demo_hash(&records[2]));
        assert_ne!(a, demo_hash(&records[3]));
        assert!(a.starts_with("0x"));
        assert_eq!(a.len(), 2 + 32);
    }

    #[test]
    fn test_verify_flips_the_flag_without_touching_the_hash() {
        let (ui, transactions) = ledger();
        let record = unverified(&transactions);
        verify_transaction(ui, transactions.clone(), record.clone());

        let stored = find(&transactions, record.id);
        assert!(stored.verified);
        assert_eq!(stored.tx_hash, None);
    }

    #[test]
    fn test_recording_without_a_live_chain_stamps_a_demo_hash() {
        let (ui, transactions) = ledger();
        let record = unverified(&transactions);
        record_on_chain(ui, transactions.clone(), record.clone());

        let stored = find(&transactions, record.id);
        assert!(stored.verified);
        assert_eq!(stored.tx_hash, Some(demo_hash(&stored)));
    }

    #[test]
    fn test_stamping_keeps_edits_made_while_recording() {
        use crate::models::TransactionStatus;

        let (ui, transactions) = ledger();
        let stale = unverified(&transactions);
        let mut advanced = stale.clone();
        advanced.status = match advanced.status {
            TransactionStatus::Pending => TransactionStatus::InProgress,
            _ => TransactionStatus::Pending,
        };
        transactions.update(advanced.clone());

        record_on_chain(ui, transactions.clone(), stale);

        let stored = find(&transactions, advanced.id);
        assert_eq!(stored.status, advanced.status, "stamp only touches hash fields");
        assert!(stored.verified);
        assert!(stored.tx_hash.is_some());
    }

    #[test]
    fn test_stamping_a_deleted_record_is_a_no_op() {
        let (ui, transactions) = ledger();
        let record = unverified(&transactions);
        transactions.remove(record.id);
        let before = transactions.signal().get_untracked();

        record_on_chain(ui, transactions.clone(), record);
        assert_eq!(transactions.signal().get_untracked(), before);
    }

    fn ledger() -> (AppStore, RecordStore<TransactionRecord>) {
        use crate::routes::Page;
        use crate::storage::{keys, MemoryStorage, StorageHandle};
        use crate::store::AppState;
        use reactive_stores::Store;

        let ui = Store::new(AppState::new(Page::ChainDashboard, None));
        let transactions = RecordStore::open(
            StorageHandle::new(MemoryStorage::new()),
            keys::TRANSACTIONS,
            seed::transactions,
        );
        (ui, transactions)
    }

    fn unverified(transactions: &RecordStore<TransactionRecord>) -> TransactionRecord {
        transactions
            .signal()
            .get_untracked()
            .into_iter()
            .find(|t| !t.verified && t.tx_hash.is_none())
            .unwrap()
    }

    fn find(transactions: &RecordStore<TransactionRecord>, id: u32) -> TransactionRecord {
        transactions
            .signal()
            .get_untracked()
            .into_iter()
            .find(|t| t.id == id)
            .unwrap()
    }
}
