//! Preference reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, ResultExt};

const SELECT_PREFERENCE_SQL: &str = "SELECT value, updated_at FROM preferences WHERE key = ?1";
const UPSERT_PREFERENCE_SQL: &str = "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_PREFERENCE_SQL: &str = "DELETE FROM preferences WHERE key = ?1";

/// A stored preference value and when it was last written.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceEntry {
    pub value: String,

    /// `None` for rows written before timestamps were recorded
    pub updated_at: Option<Timestamp>,
}

impl super::Database {
    /// Retrieves a preference value by key.
    pub fn get_preference(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get_preference_entry(key)?.map(|entry| entry.value))
    }

    /// Retrieves a preference value together with its write time.
    pub fn get_preference_entry(&self, key: &str) -> Result<Option<PreferenceEntry>> {
        let row = self
            .connection
            .query_row(SELECT_PREFERENCE_SQL, params![key], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .optional()
            .db_context("Failed to read preference")?;

        let Some((value, updated_at)) = row else {
            return Ok(None);
        };

        let updated_at = if updated_at.is_empty() {
            None
        } else {
            Some(
                updated_at
                    .parse::<Timestamp>()
                    .with_context(format!("Invalid updated_at for preference '{key}'"))?,
            )
        };

        Ok(Some(PreferenceEntry { value, updated_at }))
    }

    /// Stores a preference, replacing any previous value for the key.
    pub fn set_preference(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_PREFERENCE_SQL, params![key, value, &now])
            .db_context("Failed to store preference")?;
        Ok(())
    }

    /// Removes a preference. Returns whether a value was present.
    pub fn delete_preference(&mut self, key: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_PREFERENCE_SQL, params![key])
            .db_context("Failed to delete preference")?;
        Ok(removed > 0)
    }
}
