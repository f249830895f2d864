//! JSON persistence adapter.
//!
//! Runs as a side effect after state commit, never inside the reducer,
//! which keeps the reducer pure and synchronously testable. All failure
//! modes here are non-fatal: unreadable persisted state is treated as
//! absent, and a failed write leaves the in-memory store authoritative
//! for the rest of the session.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::storage::Storage;

/// Serializes store data to a namespaced key in a storage backend.
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    storage: S,
    key: String,
}

impl<S: Storage> PersistenceAdapter<S> {
    /// Create an adapter writing under `key`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The namespaced storage key this adapter owns.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted value, if any.
    ///
    /// Missing key and decode failure both yield `None`: corrupt data is
    /// indistinguishable from no data as far as callers are concerned.
    /// Failures are logged so they can be investigated.
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = match self.storage.read(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read persisted state");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Corrupt persisted state, starting empty");
                None
            }
        }
    }

    /// Persist `value`, replacing whatever was stored before.
    ///
    /// Fire-and-forget: encode or write failures are logged and dropped,
    /// never surfaced to the caller.
    pub fn save<T: Serialize>(&self, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to encode state for persistence");
                return;
            }
        };

        match self.storage.write(&self.key, &encoded) {
            Ok(()) => debug!(key = %self.key, bytes = encoded.len(), "Persisted state"),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to persist state; in-memory store remains authoritative");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use no_distraxionz_core::{CartLine, Product};

    use super::*;
    use crate::storage::MemoryStorage;

    fn adapter() -> PersistenceAdapter<MemoryStorage> {
        PersistenceAdapter::new(MemoryStorage::new(), "test-cart")
    }

    fn lines() -> Vec<CartLine> {
        vec![CartLine::new(
            Product::new("shirt-1", "Logo Tee", 45.0),
            Some("M".to_owned()),
            Some("Black".to_owned()),
            2,
        )]
    }

    #[test]
    fn test_load_missing_key() {
        let adapter = adapter();
        assert!(adapter.load::<Vec<CartLine>>().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let adapter = adapter();
        let items = lines();
        adapter.save(&items);

        let loaded: Vec<CartLine> = adapter.load().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_corrupt_json_loads_as_none() {
        let storage = MemoryStorage::new();
        storage.seed("test-cart", "{not valid json![");
        let adapter = PersistenceAdapter::new(storage, "test-cart");
        assert!(adapter.load::<Vec<CartLine>>().is_none());
    }

    #[test]
    fn test_wrong_shape_loads_as_none() {
        let storage = MemoryStorage::new();
        storage.seed("test-cart", r#"{"items": "not an array"}"#);
        let adapter = PersistenceAdapter::new(storage, "test-cart");
        assert!(adapter.load::<Vec<CartLine>>().is_none());
    }

    #[test]
    fn test_save_overwrites_previous() {
        let adapter = adapter();
        adapter.save(&lines());
        adapter.save(&Vec::<CartLine>::new());

        let loaded: Vec<CartLine> = adapter.load().unwrap();
        assert!(loaded.is_empty());
    }
}
