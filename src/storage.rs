//! Storage Layer
//!
//! One JSON blob per fixed string key. The backend sits behind a trait
//! so the stores and auth can run against an in-memory fake in tests;
//! the real implementation is browser localStorage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Fixed storage keys, one blob per domain. Record stores also keep an
/// id counter under `<key>:seq`.
pub mod keys {
    pub const DELIVERIES: &str = "gramsetu.deliveries";
    pub const INVENTORY: &str = "gramsetu.inventory";
    pub const TRANSACTIONS: &str = "gramsetu.transactions";
    pub const VANS: &str = "gramsetu.vans";
    pub const KIOSKS: &str = "gramsetu.kiosks";
    pub const SESSION: &str = "gramsetu.session";
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("read of {key} failed: {reason}")]
    Read { key: String, reason: String },
    #[error("write of {key} failed: {reason}")]
    Write { key: String, reason: String },
}

/// Flat string key/value persistence.
pub trait StorageBackend: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Cloneable handle passed through context and into the stores.
#[derive(Clone)]
pub struct StorageHandle(Arc<dyn StorageBackend>);

impl StorageHandle {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self(Arc::new(backend))
    }

    pub fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.load(key)
    }

    pub fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.save(key, value)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.remove(key)
    }
}

/// Browser localStorage. The window is looked up on every call rather
/// than held, which keeps the handle Send + Sync.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

impl StorageBackend for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Quota errors land here.
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Picks the backend at mount: localStorage when the browser exposes
/// it, otherwise an in-memory map that lives for the session. The demo
/// keeps working either way; only persistence across reloads is lost.
pub fn default_backend() -> StorageHandle {
    match BrowserStorage::local_storage() {
        Ok(_) => StorageHandle::new(BrowserStorage),
        Err(err) => {
            log::warn!("[storage] falling back to memory: {err}");
            StorageHandle::new(MemoryStorage::new())
        }
    }
}

/// In-memory backend: the test fake, and the runtime fallback when
/// localStorage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("poisoned lock".to_string()))
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trips() {
        let storage = StorageHandle::new(MemoryStorage::new());
        assert_eq!(storage.load("k").unwrap(), None);
        storage.save("k", "v").unwrap();
        assert_eq!(storage.load("k").unwrap(), Some("v".to_string()));
        storage.remove("k").unwrap();
        assert_eq!(storage.load("k").unwrap(), None);
    }

    #[test]
    fn test_keys_are_distinct() {
        let all = [
            keys::DELIVERIES,
            keys::INVENTORY,
            keys::TRANSACTIONS,
            keys::VANS,
            keys::KIOSKS,
            keys::SESSION,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
