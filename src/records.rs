//! Record Stores
//!
//! Each dashboard domain keeps its records in an `RwSignal<Vec<T>>`
//! mirrored to one storage blob. Every mutation rewrites the whole
//! blob; a missing or unreadable blob falls back to seed data so the
//! app always renders. Ids come from a persisted counter under
//! `<key>:seq`, never from list length, so deleting the newest record
//! cannot recycle its id.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Delivery, Entity, InventoryItem, Kiosk, RecordId, TransactionRecord, Van};
use crate::seed;
use crate::storage::{keys, StorageHandle};

#[derive(Clone)]
pub struct RecordStore<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    key: &'static str,
    storage: StorageHandle,
    records: RwSignal<Vec<T>>,
}

impl<T> RecordStore<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    /// Loads the blob for `key`, seeding (and persisting the seed) when
    /// it is absent or unreadable.
    pub fn open(storage: StorageHandle, key: &'static str, seed: fn() -> Vec<T>) -> Self {
        let (records, seeded) = match storage.load(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(list) => (list, false),
                Err(err) => {
                    log::warn!("[store] {key} is corrupt, reseeding: {err}");
                    (seed(), true)
                }
            },
            Ok(None) => (seed(), true),
            Err(err) => {
                log::warn!("[store] {key} unreadable, using seed: {err}");
                (seed(), true)
            }
        };
        let store = Self {
            key,
            storage,
            records: RwSignal::new(records),
        };
        if store.stored_counter().is_none() {
            store.save_counter(store.max_id());
        }
        if seeded {
            store.persist();
        }
        store
    }

    /// The backing signal, for tracking in memos and views.
    pub fn signal(&self) -> RwSignal<Vec<T>> {
        self.records
    }

    /// Builds a record around a freshly allocated id, appends it and
    /// persists.
    pub fn create(&self, build: impl FnOnce(RecordId) -> T) -> T {
        let record = build(self.next_id());
        self.records.update(|list| list.push(record.clone()));
        self.persist();
        record
    }

    /// Replaces the record carrying the same id. Unknown ids are a
    /// no-op.
    pub fn update(&self, record: T) {
        self.records.update(|list| {
            if let Some(slot) = list.iter_mut().find(|r| r.id() == record.id()) {
                *slot = record;
            }
        });
        self.persist();
    }

    pub fn remove(&self, id: RecordId) {
        self.records.update(|list| list.retain(|r| r.id() != id));
        self.persist();
    }

    /// Swaps in a whole new list and rewinds the id counter to its
    /// highest id. This is a full reset, not an edit; ids from the
    /// replaced list may be reissued afterwards.
    pub fn replace_all(&self, records: Vec<T>) {
        self.records.set(records);
        self.save_counter(self.max_id());
        self.persist();
    }

    fn next_id(&self) -> RecordId {
        let last = self.stored_counter().unwrap_or_else(|| self.max_id());
        let next = last + 1;
        self.save_counter(next);
        next
    }

    fn max_id(&self) -> RecordId {
        self.records
            .with_untracked(|list| list.iter().map(Entity::id).max().unwrap_or(0))
    }

    fn stored_counter(&self) -> Option<RecordId> {
        self.storage
            .load(&self.seq_key())
            .ok()
            .flatten()
            .and_then(|raw| raw.parse().ok())
    }

    fn save_counter(&self, value: RecordId) {
        if let Err(err) = self.storage.save(&self.seq_key(), &value.to_string()) {
            log::warn!("[store] id counter for {} not saved: {err}", self.key);
        }
    }

    fn seq_key(&self) -> String {
        format!("{}:seq", self.key)
    }

    /// Mirrors the full list into storage. Failures are logged and
    /// swallowed; the in-memory state stays authoritative for the
    /// session.
    fn persist(&self) {
        let payload = self
            .records
            .with_untracked(|list| serde_json::to_string(list));
        match payload {
            Ok(json) => {
                if let Err(err) = self.storage.save(self.key, &json) {
                    log::warn!("[store] {} not persisted: {err}", self.key);
                }
            }
            Err(err) => log::warn!("[store] {} not serialized: {err}", self.key),
        }
    }
}

/// Every record store plus the storage handle they share, provided once
/// through context at mount.
#[derive(Clone)]
pub struct Stores {
    storage: StorageHandle,
    pub deliveries: RecordStore<Delivery>,
    pub inventory: RecordStore<InventoryItem>,
    pub transactions: RecordStore<TransactionRecord>,
    pub vans: RecordStore<Van>,
    pub kiosks: RecordStore<Kiosk>,
}

impl Stores {
    pub fn open(storage: StorageHandle) -> Self {
        Self {
            deliveries: RecordStore::open(storage.clone(), keys::DELIVERIES, seed::deliveries),
            inventory: RecordStore::open(storage.clone(), keys::INVENTORY, seed::inventory),
            transactions: RecordStore::open(
                storage.clone(),
                keys::TRANSACTIONS,
                seed::transactions,
            ),
            vans: RecordStore::open(storage.clone(), keys::VANS, seed::vans),
            kiosks: RecordStore::open(storage.clone(), keys::KIOSKS, seed::kiosks),
            storage,
        }
    }

    pub fn storage(&self) -> StorageHandle {
        self.storage.clone()
    }

    /// Puts every store back on its seed dataset.
    pub fn reset_demo_data(&self) {
        self.deliveries.replace_all(seed::deliveries());
        self.inventory.replace_all(seed::inventory());
        self.transactions.replace_all(seed::transactions());
        self.vans.replace_all(seed::vans());
        self.kiosks.replace_all(seed::kiosks());
    }
}

pub fn use_stores() -> Stores {
    expect_context::<Stores>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliveryStatus;
    use crate::storage::MemoryStorage;

    fn memory() -> StorageHandle {
        StorageHandle::new(MemoryStorage::new())
    }

    fn sample_delivery(id: RecordId) -> Delivery {
        Delivery {
            id,
            origin: "Pune Hub".to_string(),
            destination: "Velhe".to_string(),
            status: DeliveryStatus::Pending,
            packages: 4,
            drone_cost: 900.0,
            traditional_cost: 2100.0,
            drone_hours: 1.0,
            traditional_hours: 6.0,
            drone_co2_kg: 1.1,
            traditional_co2_kg: 8.4,
            route: Vec::new(),
            scheduled_for: "2026-08-25".to_string(),
        }
    }

    #[test]
    fn test_open_seeds_and_persists_when_empty() {
        let storage = memory();
        let store = RecordStore::open(storage.clone(), keys::DELIVERIES, seed::deliveries);
        assert!(!store.signal().get_untracked().is_empty());
        let blob = storage.load(keys::DELIVERIES).unwrap();
        assert!(blob.is_some(), "seed should be written back");
        let counter = storage
            .load(&format!("{}:seq", keys::DELIVERIES))
            .unwrap()
            .unwrap();
        assert_eq!(counter.parse::<RecordId>().unwrap(), store.max_id());
    }

    #[test]
    fn test_open_recovers_from_corrupt_blob() {
        let storage = memory();
        storage.save(keys::DELIVERIES, "{not json").unwrap();
        let store = RecordStore::open(storage.clone(), keys::DELIVERIES, seed::deliveries);
        assert_eq!(store.signal().get_untracked(), seed::deliveries());
        // The bad blob is replaced on open, not left for the next write.
        let raw = storage.load(keys::DELIVERIES).unwrap().unwrap();
        let reread: Vec<Delivery> = serde_json::from_str(&raw).unwrap();
        assert_eq!(reread, seed::deliveries());
    }

    #[test]
    fn test_create_survives_reload() {
        let storage = memory();
        let store: RecordStore<Delivery> =
            RecordStore::open(storage.clone(), keys::DELIVERIES, Vec::new);
        let created = store.create(sample_delivery);
        assert_eq!(created.id, 1);

        let reopened: RecordStore<Delivery> =
            RecordStore::open(storage, keys::DELIVERIES, Vec::new);
        let records = reopened.signal().get_untracked();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], created);
    }

    #[test]
    fn test_ids_are_never_recycled() {
        let store: RecordStore<Delivery> =
            RecordStore::open(memory(), keys::DELIVERIES, Vec::new);
        let first = store.create(sample_delivery);
        store.remove(first.id);
        let second = store.create(sample_delivery);
        assert!(second.id > first.id);
        assert_eq!(store.signal().get_untracked().len(), 1);
    }

    #[test]
    fn test_update_replaces_matching_record_only() {
        let store: RecordStore<Delivery> =
            RecordStore::open(memory(), keys::DELIVERIES, Vec::new);
        let a = store.create(sample_delivery);
        let b = store.create(sample_delivery);

        let mut changed = a.clone();
        changed.status = DeliveryStatus::Completed;
        store.update(changed.clone());

        let records = store.signal().get_untracked();
        assert_eq!(records[0], changed);
        assert_eq!(records[1], b);
    }

    #[test]
    fn test_persisting_the_same_list_is_idempotent() {
        let storage = memory();
        let store = RecordStore::open(storage.clone(), keys::DELIVERIES, seed::deliveries);
        let first = storage.load(keys::DELIVERIES).unwrap().unwrap();
        let unchanged = store.signal().get_untracked()[0].clone();
        store.update(unchanged);
        let second = storage.load(keys::DELIVERIES).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_deleting_the_last_record_empties_the_store() {
        let store: RecordStore<Delivery> =
            RecordStore::open(memory(), keys::DELIVERIES, Vec::new);
        let only = store.create(sample_delivery);
        store.remove(only.id);
        assert!(store.signal().get_untracked().is_empty());
        let stats = crate::stats::delivery_stats(&store.signal().get_untracked());
        assert!(stats.by_status.groups.is_empty());
    }

    #[test]
    fn test_replace_all_rewinds_the_id_counter() {
        let storage = memory();
        let store: RecordStore<Delivery> =
            RecordStore::open(storage.clone(), keys::DELIVERIES, Vec::new);
        store.create(sample_delivery);
        store.create(sample_delivery);

        store.replace_all(seed::deliveries());
        assert_eq!(store.signal().get_untracked(), seed::deliveries());
        let next = store.create(sample_delivery);
        assert_eq!(next.id, seed::deliveries().len() as RecordId + 1);
    }

    #[test]
    fn test_stores_open_every_domain() {
        let stores = Stores::open(memory());
        assert!(!stores.deliveries.signal().get_untracked().is_empty());
        assert!(!stores.inventory.signal().get_untracked().is_empty());
        assert!(!stores.transactions.signal().get_untracked().is_empty());
        assert!(!stores.vans.signal().get_untracked().is_empty());
        assert!(!stores.kiosks.signal().get_untracked().is_empty());
    }

    #[test]
    fn test_reset_restores_every_seed_dataset() {
        let stores = Stores::open(memory());
        stores.deliveries.remove(1);
        stores.inventory.remove(1);
        stores.reset_demo_data();
        assert_eq!(
            stores.deliveries.signal().get_untracked(),
            seed::deliveries()
        );
        assert_eq!(stores.inventory.signal().get_untracked(), seed::inventory());
    }
}
