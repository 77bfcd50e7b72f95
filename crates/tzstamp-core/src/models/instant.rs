//! Absolute point in time parsed from an offset-designated string.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StampError};

/// Unix seconds of `0001-01-01T00:00:00Z`.
const EARLIEST_SECOND: i64 = -62_135_596_800;

/// An unambiguous instant, e.g. `2024-01-01T12:00:00Z`.
///
/// Parsing requires an explicit offset designator (`Z` or `+HH:MM`). Strings
/// without one describe a civil time rather than an instant and are rejected.
/// The value keeps full nanosecond precision.
///
/// Accepted instants run from `0001-01-01T00:00:00Z` to the end of the
/// supported range, `9999-12-30T22:00:00Z`. Earlier instants would render a
/// negative or three-digit year in some zones, and later ones do not fit a
/// timestamp that every zone offset can be applied to. Both are reported as
/// `InvalidInstant` even when the string itself is well formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(Timestamp);

impl Instant {
    /// Parses an instant, reporting `InvalidInstant` on failure.
    pub fn parse(input: &str) -> Result<Self> {
        let timestamp = input
            .trim()
            .parse::<Timestamp>()
            .map_err(|e| StampError::invalid_instant(input, e))?;

        if timestamp.as_second() < EARLIEST_SECOND {
            return Err(StampError::invalid_instant(
                input,
                "instants before year 0001 are not supported",
            ));
        }
        Ok(Self(timestamp))
    }

    /// The underlying timestamp.
    pub fn timestamp(&self) -> Timestamp {
        self.0
    }
}

impl From<Timestamp> for Instant {
    fn from(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }
}

impl FromStr for Instant {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Renders the instant back as RFC 3339 in UTC.
impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
