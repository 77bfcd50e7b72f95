//! Zone selector population.

use super::ZoneDetector;
use crate::models::{ZoneChoices, ZoneId, FALLBACK_ZONE};

/// Builds the zone selector contents with `selected` pre-selected.
///
/// Uses the runtime's full zone list when it can be enumerated. Otherwise the
/// list shrinks to the detected zone, or `UTC` if detection fails too. The
/// selected zone is always present in the result.
pub fn zone_choices(detector: &dyn ZoneDetector, selected: &ZoneId) -> ZoneChoices {
    let (mut zones, complete) = match detector.available_zones() {
        Some(zones) if !zones.is_empty() => (zones, true),
        _ => {
            let detected = detector
                .detect()
                .map(|zone| zone.name().to_string())
                .unwrap_or_else(|| FALLBACK_ZONE.to_string());
            (vec![detected], false)
        }
    };

    if !zones.iter().any(|zone| zone == selected.name()) {
        zones.push(selected.name().to_string());
    }
    zones.sort_unstable();
    zones.dedup();

    ZoneChoices {
        zones,
        selected: selected.name().to_string(),
        complete,
    }
}

impl ZoneChoices {
    /// Keeps zones containing `needle` (ASCII case-insensitive) plus the
    /// selected zone.
    pub fn filtered(mut self, needle: &str) -> Self {
        let needle = needle.to_ascii_lowercase();
        let selected = self.selected.clone();
        self.zones
            .retain(|zone| *zone == selected || zone.to_ascii_lowercase().contains(&needle));
        self
    }
}
