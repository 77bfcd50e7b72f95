//! Key/value backends for operator preferences.

use std::collections::HashMap;

use jiff::Timestamp;

use crate::{db::Database, error::Result};

/// A persistent key/value store holding string preferences.
///
/// Writes overwrite; there is no expiry.
pub trait PreferenceStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Returns whether a value was present.
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// When `key` was last written, if the backend records it.
    fn updated_at(&self, _key: &str) -> Result<Option<Timestamp>> {
        Ok(None)
    }
}

impl PreferenceStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_preference(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_preference(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        self.delete_preference(key)
    }

    fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        Ok(self
            .get_preference_entry(key)?
            .and_then(|entry| entry.updated_at))
    }
}

/// Process-local store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("display_zone").unwrap(), None);

        store.set("display_zone", "UTC").unwrap();
        store.set("display_zone", "Europe/Paris").unwrap();
        assert_eq!(store.get("display_zone").unwrap().as_deref(), Some("Europe/Paris"));
        assert_eq!(store.updated_at("display_zone").unwrap(), None);
    }

    #[test]
    fn test_memory_store_remove() {
        let mut store = MemoryStore::new();
        store.set("display_zone", "UTC").unwrap();
        assert!(store.remove("display_zone").unwrap());
        assert!(!store.remove("display_zone").unwrap());
    }

    #[test]
    fn test_database_store_records_write_time() {
        let mut db = Database::open_in_memory().unwrap();
        let before = Timestamp::now();
        PreferenceStore::set(&mut db, "display_zone", "Asia/Tokyo").unwrap();

        assert_eq!(
            PreferenceStore::get(&db, "display_zone").unwrap().as_deref(),
            Some("Asia/Tokyo")
        );
        let written = db.updated_at("display_zone").unwrap().unwrap();
        assert!(written >= before);
    }
}
