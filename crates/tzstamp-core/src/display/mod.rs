//! Display formatting for console output.
//!
//! Domain values implement [`std::fmt::Display`] directly and produce
//! markdown, which the CLI renders to the terminal. Wrappers in this module
//! cover values that need context to print, such as an instant shown in a
//! particular zone.
//!
//! ## Module Organization
//!
//! - [`datetime`]: Zone-aware timestamp wrapper ([`ZonedDisplay`])
//! - [`choices`]: Display implementations for zone listings and resolved zones
//! - [`status`]: Status and confirmation messages ([`OperationStatus`])
//!
//! ```rust
//! use tzstamp_core::{display::ZonedDisplay, models::{Instant, ZoneId}};
//!
//! let instant = Instant::parse("2024-01-01T12:00:00Z").unwrap();
//! let zone = ZoneId::new("America/Los_Angeles").unwrap();
//! assert_eq!(ZonedDisplay::new(&instant, &zone).to_string(), "2024-01-01 04:00");
//! ```

pub mod choices;
pub mod datetime;
pub mod status;

pub use datetime::ZonedDisplay;
pub use status::OperationStatus;
