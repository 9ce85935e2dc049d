//! In-memory store for tests and throwaway sessions.

use std::collections::BTreeMap;

use super::{KeyValueStore, StorageError};

/// Map-backed [`KeyValueStore`].
///
/// Reads and writes can be switched to fail, which models storage that is
/// disabled or over quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    reject_reads: bool,
    reject_writes: bool,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value (builder style).
    #[must_use]
    pub fn with_entry(mut self, key: &str, raw: &str) -> Self {
        self.entries.insert(key.to_owned(), raw.to_owned());
        self
    }

    /// Make every subsequent read fail.
    pub const fn set_reject_reads(&mut self, reject: bool) {
        self.reject_reads = reject;
    }

    /// Make every subsequent write and removal fail.
    pub const fn set_reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    /// Raw value currently stored at `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Drop every entry, as if site data were cleared.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl KeyValueStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.reject_reads {
            return Err(StorageError::Unavailable("reads disabled".to_owned()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save_raw(&mut self, key: &str, data: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Unavailable("quota exceeded".to_owned()));
        }
        self.entries.insert(key.to_owned(), data.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Unavailable("quota exceeded".to_owned()));
        }
        self.entries.remove(key);
        Ok(())
    }
}
