//! Display zone preference.
//!
//! [`ZonePreference`] decides which zone timestamps are shown in. The
//! operator's saved choice wins; without one the host's local zone is used,
//! and without that `UTC`. Callers resolve the zone once per render pass and
//! hand it to the [`formatter`](crate::formatter); nothing here is cached in
//! module state.
//!
//! ```text
//! stored preference ──▶ detected host zone ──▶ UTC
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tzstamp_core::{
//!     formatter::format_in,
//!     models::ZoneId,
//!     preference::{MemoryStore, StaticZoneDetector, ZonePreference},
//! };
//!
//! let mut preference = ZonePreference::new(MemoryStore::new(), StaticZoneDetector::unavailable());
//! assert_eq!(preference.resolve().name(), "UTC");
//!
//! preference.store(&ZoneId::new("Europe/London").unwrap()).unwrap();
//! let zone = preference.resolve();
//! assert_eq!(format_in("2024-07-01T12:00:00Z", &zone).unwrap(), "2024-07-01 13:00");
//! ```

use jiff::Timestamp;
use log::{debug, warn};

pub mod builder;
pub mod choices;
pub mod detect;
pub mod store;

pub use builder::ZonePreferenceBuilder;
pub use choices::zone_choices;
pub use detect::{StaticZoneDetector, SystemZoneDetector, ZoneDetector};
pub use store::{MemoryStore, PreferenceStore};

use crate::{
    error::Result,
    models::{ResolvedZone, ZoneChoices, ZoneId, ZoneSource},
};

/// Store key holding the operator's display zone.
pub const DISPLAY_ZONE_KEY: &str = "display_zone";

/// Resolves and persists the operator's display zone.
pub struct ZonePreference<S, D> {
    store: S,
    detector: D,
}

impl<S: PreferenceStore, D: ZoneDetector> ZonePreference<S, D> {
    pub fn new(store: S, detector: D) -> Self {
        Self { store, detector }
    }

    /// The effective display zone. Never fails.
    pub fn resolve(&self) -> ZoneId {
        self.resolve_with_source().zone
    }

    /// The effective display zone and the tier it came from.
    pub fn resolve_with_source(&self) -> ResolvedZone {
        if let Some(zone) = self.stored_zone() {
            debug!("Using stored display zone {zone}");
            return ResolvedZone::new(zone, ZoneSource::Stored);
        }

        match self.detector.detect() {
            Some(zone) => {
                debug!("Using detected display zone {zone}");
                ResolvedZone::new(zone, ZoneSource::Detected)
            }
            None => ResolvedZone::new(ZoneId::utc(), ZoneSource::Fallback),
        }
    }

    /// Saves `zone` as the operator's choice, replacing any previous one.
    pub fn store(&mut self, zone: &ZoneId) -> Result<()> {
        debug!("Storing display zone {zone}");
        self.store.set(DISPLAY_ZONE_KEY, zone.name())
    }

    /// Forgets the operator's choice. Returns whether one was stored.
    pub fn clear(&mut self) -> Result<bool> {
        debug!("Clearing display zone");
        self.store.remove(DISPLAY_ZONE_KEY)
    }

    /// When the current choice was saved, if the store records it.
    pub fn stored_at(&self) -> Result<Option<Timestamp>> {
        self.store.updated_at(DISPLAY_ZONE_KEY)
    }

    /// Zone selector contents with the resolved zone pre-selected.
    pub fn choices(&self) -> ZoneChoices {
        zone_choices(&self.detector, &self.resolve())
    }

    /// The stored zone if present, non-empty and still recognised.
    fn stored_zone(&self) -> Option<ZoneId> {
        let value = match self.store.get(DISPLAY_ZONE_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(e) => {
                warn!("Ignoring stored display zone: {e}");
                return None;
            }
        };

        if value.trim().is_empty() {
            return None;
        }

        match ZoneId::new(&value) {
            Ok(zone) => Some(zone),
            Err(e) => {
                warn!("Ignoring stored display zone: {e}");
                None
            }
        }
    }
}
