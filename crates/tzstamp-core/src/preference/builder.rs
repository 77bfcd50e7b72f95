//! Builder for creating and configuring ZonePreference instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::{SystemZoneDetector, ZonePreference};
use crate::{
    db::Database,
    error::{Result, StampError},
};

/// Builder for a database-backed [`ZonePreference`] using the host's zone
/// detection.
#[derive(Debug, Clone)]
pub struct ZonePreferenceBuilder {
    database_path: Option<PathBuf>,
}

impl ZonePreferenceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tzstamp/tzstamp.db` or `~/.local/share/tzstamp/tzstamp.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the preference database, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StampError::FileSystem` if the database directory cannot be
    /// created, `StampError::XdgDirectory` if no default location exists, and
    /// `StampError::Database` if database initialization fails.
    pub fn build(self) -> Result<ZonePreference<Database, SystemZoneDetector>> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StampError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        debug!("Opening preference database at {}", db_path.display());
        let db = Database::new(&db_path)?;
        Ok(ZonePreference::new(db, SystemZoneDetector))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tzstamp")
            .place_data_file("tzstamp.db")
            .map_err(|e| StampError::XdgDirectory(e.to_string()))
    }
}

impl Default for ZonePreferenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
