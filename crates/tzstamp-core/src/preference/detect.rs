//! Host time zone capabilities.
//!
//! Runtimes differ in what they can tell us: some cannot name their local
//! zone, some cannot enumerate the zones they support. [`ZoneDetector`]
//! exposes both as optional capabilities so callers can degrade instead of
//! failing.

use jiff::tz::{self, TimeZone};

use crate::models::ZoneId;

/// Source of the host's local zone and supported zone list.
pub trait ZoneDetector {
    /// The host's local IANA zone, or `None` if it cannot be determined.
    fn detect(&self) -> Option<ZoneId>;

    /// Every zone the runtime supports, or `None` if it cannot enumerate them.
    fn available_zones(&self) -> Option<Vec<String>>;
}

/// Detector backed by the operating system's zone setting and the bundled
/// time zone database.
///
/// The local zone honours the `TZ` environment variable before falling back
/// to the system configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemZoneDetector;

impl ZoneDetector for SystemZoneDetector {
    fn detect(&self) -> Option<ZoneId> {
        TimeZone::try_system().ok().and_then(ZoneId::from_time_zone)
    }

    fn available_zones(&self) -> Option<Vec<String>> {
        let zones: Vec<String> = tz::db()
            .available()
            .map(|name| name.as_str().to_string())
            .collect();
        if zones.is_empty() {
            None
        } else {
            Some(zones)
        }
    }
}

/// Detector with fixed answers, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticZoneDetector {
    detected: Option<ZoneId>,
    zones: Option<Vec<String>>,
}

impl StaticZoneDetector {
    /// A detector that can neither detect nor enumerate.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_detected(mut self, zone: ZoneId) -> Self {
        self.detected = Some(zone);
        self
    }

    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones = Some(zones.into_iter().map(Into::into).collect());
        self
    }
}

impl ZoneDetector for StaticZoneDetector {
    fn detect(&self) -> Option<ZoneId> {
        self.detected.clone()
    }

    fn available_zones(&self) -> Option<Vec<String>> {
        self.zones.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_detector_enumerates_bundled_zones() {
        let zones = SystemZoneDetector.available_zones().unwrap();
        assert!(zones.iter().any(|zone| zone == "America/New_York"));
        assert!(zones.iter().any(|zone| zone == "Europe/London"));
    }

    #[test]
    fn test_static_detector_unavailable() {
        let detector = StaticZoneDetector::unavailable();
        assert!(detector.detect().is_none());
        assert!(detector.available_zones().is_none());
    }

    #[test]
    fn test_static_detector_answers() {
        let detector = StaticZoneDetector::default()
            .with_detected(ZoneId::new("Asia/Tehran").unwrap())
            .with_zones(["Asia/Tehran", "UTC"]);
        assert_eq!(detector.detect().unwrap().name(), "Asia/Tehran");
        assert_eq!(detector.available_zones().unwrap().len(), 2);
    }
}
