//! Persistence boundary for the cart, favorites and user profile.
//!
//! Storage is split into a raw key-value port ([`KeyValueStore`]) and a thin
//! JSON adapter ([`Storage`]) on top of it. The adapter never fails a read:
//! missing keys, undecodable values and store errors all resolve to the
//! caller's fallback. Writes are a single best-effort attempt whose failure is
//! returned as a value for the caller to log or ignore.

mod fs;
mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

pub use fs::FsStore;
pub use memory::MemoryStore;

/// Fixed key names for persisted entries.
pub mod keys {
    /// Cart lines: JSON array of `{ "id": string, "qty": integer }`.
    pub const CART: &str = "ethiopia_cart";

    /// Favorite dish ids: JSON array of strings.
    pub const FAVORITES: &str = "ethiopia_favorites";

    /// Demo sign-in profile: `{ "name": string, "email": string }`.
    pub const USER: &str = "ethiopia_user";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error while reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded or decoded.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The store refused the operation (disabled, over quota, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The key cannot be mapped onto the backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Storage port for raw values keyed by logical name.
pub trait KeyValueStore {
    /// Load the raw value stored at `key`. Returns `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist a raw value at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn save_raw(&mut self, key: &str, data: &str) -> Result<(), StorageError>;

    /// Delete the value at `key`. Succeeds if the key did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// JSON adapter over a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct Storage<S> {
    store: S,
}

impl<S> Storage<S> {
    /// Wrap a backend.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the backend.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the adapter and return the backend.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> Storage<S> {
    /// Load and decode the value at `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or holds an empty value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the value does not decode.
    pub fn try_read<T>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    /// Load and decode the value at `key`, or return `fallback`.
    ///
    /// Never fails: absent keys, empty values, decode failures and backend
    /// errors all yield the fallback.
    pub fn read<T>(&self, key: &str, fallback: T) -> T
    where
        T: DeserializeOwned,
    {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(key, "storage key absent, using fallback");
                fallback
            }
            Err(e) => {
                warn!(key, error = %e, "unreadable storage value, using fallback");
                fallback
            }
        }
    }

    /// Encode and store `value` at `key`. One attempt, no retry.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the backend rejects the write.
    pub fn write<T>(&mut self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_string(value)?;
        self.store.save_raw(key, &data)
    }

    /// Delete the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    pub fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key_returns_fallback() {
        let storage = Storage::new(MemoryStore::new());
        let value: Vec<String> = storage.read(keys::FAVORITES, vec!["kitfo".to_owned()]);
        assert_eq!(value, vec!["kitfo".to_owned()]);
    }

    #[test]
    fn test_read_corrupt_value_returns_fallback() {
        let store = MemoryStore::new().with_entry(keys::CART, "{not json");
        let storage = Storage::new(store);
        let value: Vec<u32> = storage.read(keys::CART, Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_read_wrong_shape_returns_fallback() {
        let store = MemoryStore::new().with_entry(keys::FAVORITES, r#"{"a":1}"#);
        let storage = Storage::new(store);
        let value: Vec<String> = storage.read(keys::FAVORITES, Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn test_read_empty_value_returns_fallback() {
        let store = MemoryStore::new().with_entry(keys::USER, "");
        let storage = Storage::new(store);
        let value: Option<String> = storage.read(keys::USER, None);
        assert!(value.is_none());
        assert!(storage.try_read::<String>(keys::USER).unwrap().is_none());
    }

    #[test]
    fn test_read_backend_failure_returns_fallback() {
        let mut store = MemoryStore::new().with_entry(keys::CART, "[]");
        store.set_reject_reads(true);
        let storage = Storage::new(store);
        let value: Vec<u32> = storage.read(keys::CART, vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_write_then_read() {
        let mut storage = Storage::new(MemoryStore::new());
        storage.write(keys::FAVORITES, &["tibs", "kikil"]).unwrap();

        assert_eq!(
            storage.store().get(keys::FAVORITES),
            Some(r#"["tibs","kikil"]"#)
        );
        let value: Vec<String> = storage.read(keys::FAVORITES, Vec::new());
        assert_eq!(value, vec!["tibs".to_owned(), "kikil".to_owned()]);
    }

    #[test]
    fn test_write_failure_is_returned_not_raised() {
        let mut store = MemoryStore::new();
        store.set_reject_writes(true);
        let mut storage = Storage::new(store);

        let result = storage.write(keys::CART, &Vec::<u32>::new());
        assert!(matches!(result, Err(StorageError::Unavailable(_))));
        assert!(storage.store().get(keys::CART).is_none());
    }

    #[test]
    fn test_remove() {
        let mut storage = Storage::new(MemoryStore::new().with_entry(keys::USER, "{}"));
        storage.remove(keys::USER).unwrap();
        storage.remove(keys::USER).unwrap();
        assert!(storage.store().get(keys::USER).is_none());
    }
}
