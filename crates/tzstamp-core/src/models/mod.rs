//! Data models for instants, zones and the values derived from them.
//!
//! Every input is validated when its model value is built: an [`Instant`]
//! always carries an explicit offset and a [`ZoneId`] always names a zone in
//! the database. Code that holds both can format without further checks.
//!
//! # Examples
//!
//! ```rust
//! use tzstamp_core::models::{Instant, ZoneId};
//!
//! let instant: Instant = "2024-01-01T12:00:00Z".parse().unwrap();
//! let zone: ZoneId = "America/New_York".parse().unwrap();
//! assert_eq!(zone.name(), "America/New_York");
//! assert_eq!(instant.to_string(), "2024-01-01T12:00:00Z");
//! ```

pub mod choices;
pub mod display_string;
pub mod instant;
pub mod resolved;
pub mod role;
pub mod zone;


pub use choices::ZoneChoices;
pub use display_string::DisplayString;
pub use instant::Instant;
pub use resolved::{ResolvedZone, ZoneSource};
pub use role::Role;
pub use zone::{ZoneId, FALLBACK_ZONE};
