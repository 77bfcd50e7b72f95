//! Display implementations for the zone selector and resolved zones.

use std::fmt;

use crate::models::{ResolvedZone, ZoneChoices};

impl fmt::Display for ZoneChoices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.zones.is_empty() {
            return writeln!(f, "No zones found.");
        }

        writeln!(f, "# Time zones ({})", self.zones.len())?;
        if !self.complete {
            writeln!(f, "*Zone list unavailable, showing detected zone only*")?;
        }
        writeln!(f)?;

        for zone in &self.zones {
            if self.is_selected(zone) {
                writeln!(f, "* **{zone}** (selected)")?;
            } else {
                writeln!(f, "* {zone}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ResolvedZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**Zone**: {}", self.zone)?;
        writeln!(f, "**Source**: {}", self.source)
    }
}
