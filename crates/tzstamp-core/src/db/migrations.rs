//! Database schema initialization and migrations.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Apply migrations first so the schema script sees the current layout
        self.apply_migrations()?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        let has_table: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'preferences'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_table {
            return Ok(());
        }

        // Early files stored only key and value
        let has_updated_at: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('preferences') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_updated_at {
            debug!("Adding updated_at column to preferences table");
            self.connection
                .execute(
                    "ALTER TABLE preferences ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .db_context("Failed to add updated_at column to preferences table")?;
        }

        Ok(())
    }
}
