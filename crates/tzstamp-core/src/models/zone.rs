//! Validated IANA time zone identifiers.

use std::{fmt, str::FromStr};

use jiff::tz::TimeZone;
use serde::{Serialize, Serializer};

use crate::error::{Result, StampError};

/// Name of the zone used when nothing better can be determined.
pub const FALLBACK_ZONE: &str = "UTC";

/// An IANA zone identifier that is known to the time zone database.
///
/// Construction looks the name up in the bundled database, so holding a
/// `ZoneId` means conversion into that zone cannot fail. Lookup ignores ASCII
/// case; [`ZoneId::name`] returns the database's canonical spelling.
#[derive(Debug, Clone)]
pub struct ZoneId {
    name: String,
    tz: TimeZone,
}

impl ZoneId {
    /// Looks up `name`, reporting `UnknownZone` when the database has no such
    /// entry.
    pub fn new(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        let tz = TimeZone::get(trimmed).map_err(|e| StampError::unknown_zone(name, e))?;
        let name = tz.iana_name().unwrap_or(trimmed).to_string();
        Ok(Self { name, tz })
    }

    /// The `UTC` zone.
    pub fn utc() -> Self {
        Self {
            name: FALLBACK_ZONE.to_string(),
            tz: TimeZone::UTC,
        }
    }

    /// Wraps a time zone obtained from the host, if it carries an IANA name.
    pub(crate) fn from_time_zone(tz: TimeZone) -> Option<Self> {
        let name = tz.iana_name()?.to_string();
        Some(Self { name, tz })
    }

    /// Canonical identifier, e.g. `America/New_York`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The zone's rules.
    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }
}

impl PartialEq for ZoneId {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ZoneId {}

impl FromStr for ZoneId {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for ZoneId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}
