//! Result of resolving the effective display zone.

use std::fmt;

use serde::Serialize;

use super::ZoneId;

/// Which resolution tier produced the display zone.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZoneSource {
    /// The operator's saved preference
    Stored,

    /// The host's local zone
    Detected,

    /// Neither was available
    Fallback,
}

impl ZoneSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneSource::Stored => "stored",
            ZoneSource::Detected => "detected",
            ZoneSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ZoneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display zone along with where it came from.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResolvedZone {
    pub zone: ZoneId,
    pub source: ZoneSource,
}

impl ResolvedZone {
    pub fn new(zone: ZoneId, source: ZoneSource) -> Self {
        Self { zone, source }
    }
}
