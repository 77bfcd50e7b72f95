//! DateTime display utilities.
//!
//! This module provides a wrapper type for formatting instants in an explicit
//! zone in the fixed console format.

use std::fmt;

use crate::{
    formatter::DISPLAY_FORMAT,
    models::{Instant, ZoneId},
};

/// An instant paired with the zone it should be shown in.
///
/// Implements `Display` so a formatted timestamp can be written straight into
/// larger output.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - No seconds and no zone suffix
pub struct ZonedDisplay<'a> {
    instant: &'a Instant,
    zone: &'a ZoneId,
}

impl<'a> ZonedDisplay<'a> {
    pub fn new(instant: &'a Instant, zone: &'a ZoneId) -> Self {
        Self { instant, zone }
    }
}

impl<'a> fmt::Display for ZonedDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.instant
                .timestamp()
                .to_zoned(self.zone.time_zone().clone())
                .strftime(DISPLAY_FORMAT)
        )
    }
}
