//! Timezone-aware timestamp formatting.
//!
//! Converts an instant into the wall-clock date and time an observer in a
//! given zone would read, using the zone's rules in effect at that instant,
//! and renders it as `YYYY-MM-DD HH:MM`. The result depends only on the two
//! inputs: the host's locale and local zone play no part.
//!
//! ```rust
//! use tzstamp_core::formatter::format;
//!
//! let shown = format("2024-07-01T12:00:00Z", "America/New_York").unwrap();
//! assert_eq!(shown, "2024-07-01 08:00");
//! ```

use crate::{
    display::ZonedDisplay,
    error::Result,
    models::{DisplayString, Instant, ZoneId},
};

/// strftime pattern for [`DisplayString`].
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats a raw instant string in a raw zone identifier.
///
/// # Errors
///
/// Returns `StampError::InvalidInstant` if `instant` is not an
/// offset-designated date-time, and `StampError::UnknownZone` if `zone` is not
/// in the time zone database. The instant is checked first.
pub fn format(instant: &str, zone: &str) -> Result<DisplayString> {
    let instant = Instant::parse(instant)?;
    let zone = ZoneId::new(zone)?;
    Ok(format_instant(&instant, &zone))
}

/// Formats an already validated instant in an already validated zone.
pub fn format_instant(instant: &Instant, zone: &ZoneId) -> DisplayString {
    DisplayString::new(ZonedDisplay::new(instant, zone).to_string())
}

/// Formats an instant string in a validated zone.
///
/// This is the shape a render pass uses: the zone is resolved once and each
/// timestamp on the page is formatted against it.
pub fn format_in(instant: &str, zone: &ZoneId) -> Result<DisplayString> {
    Ok(format_instant(&Instant::parse(instant)?, zone))
}
