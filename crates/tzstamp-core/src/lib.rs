//! Core library for the tzstamp console time display.
//!
//! Timestamps in the SMS console are stored in UTC and shown to the operator
//! in their own time zone. This crate provides the pieces behind that:
//!
//! - [`formatter`]: converts an instant into `YYYY-MM-DD HH:MM` wall-clock
//!   text for an IANA zone, DST included
//! - [`preference`]: resolves the operator's display zone (saved choice,
//!   detected host zone, then `UTC`) and persists changes
//! - [`access`]: the role check guarding console views
//! - [`db`]: SQLite key/value storage for preferences
//! - [`display`]: markdown `Display` implementations for CLI output
//!
//! # Quick Start
//!
//! ```rust
//! use tzstamp_core::{format, ZonePreferenceBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(format("2024-01-01T12:00:00Z", "America/New_York")?, "2024-01-01 07:00");
//!
//! let mut preference = ZonePreferenceBuilder::new()
//!     .with_database_path(Some("prefs.db"))
//!     .build()?;
//! preference.store(&"Europe/London".parse()?)?;
//! let zone = preference.resolve();
//! println!("{}", tzstamp_core::format_in("2024-01-01T12:00:00Z", &zone)?);
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod db;
pub mod display;
pub mod error;
pub mod formatter;
pub mod models;
pub mod preference;

// Re-export commonly used types
pub use access::can_access;
pub use db::Database;
pub use display::{OperationStatus, ZonedDisplay};
pub use error::{Result, StampError};
pub use formatter::{format, format_in, format_instant};
pub use models::{
    DisplayString, Instant, ResolvedZone, Role, ZoneChoices, ZoneId, ZoneSource, FALLBACK_ZONE,
};
pub use preference::{
    zone_choices, MemoryStore, PreferenceStore, StaticZoneDetector, SystemZoneDetector,
    ZoneDetector, ZonePreference, ZonePreferenceBuilder,
};
