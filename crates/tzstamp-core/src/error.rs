//! Error types for the tzstamp library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all formatting and preference operations.
#[derive(Error, Debug)]
pub enum StampError {
    /// The timestamp string is not an offset-designated date-time in range
    #[error("Invalid instant '{input}': {reason}")]
    InvalidInstant { input: String, reason: String },
    /// The zone identifier is not in the time zone database
    #[error("Unknown time zone '{zone}': {source}")]
    UnknownZone {
        zone: String,
        #[source]
        source: jiff::Error,
    },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> StampError {
        StampError::Database {
            message: self.message,
            source,
        }
    }
}

impl StampError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Rejects the given instant string for `reason`.
    pub fn invalid_instant(input: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::InvalidInstant {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Wraps a lookup failure for the given zone identifier.
    pub fn unknown_zone(zone: impl Into<String>, source: jiff::Error) -> Self {
        Self::UnknownZone {
            zone: zone.into(),
            source,
        }
    }

    /// True for the two caller errors the formatter reports.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidInstant { .. } | Self::UnknownZone { .. })
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to StampError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| StampError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StampError::database(message).with_source(e))
    }
}

/// Result type alias for tzstamp operations
pub type Result<T> = std::result::Result<T, StampError>;
