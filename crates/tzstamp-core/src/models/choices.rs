//! Zone selector contents.

use serde::{Deserialize, Serialize};

/// The zones offered by a zone selector and the one pre-selected in it.
///
/// `selected` is always one of `zones`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneChoices {
    /// Zone identifiers in display order
    pub zones: Vec<String>,

    /// The active zone
    pub selected: String,

    /// False when the runtime could not enumerate its zones and the list was
    /// reduced to the detected zone
    pub complete: bool,
}

impl ZoneChoices {
    /// Number of entries in the selector.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn is_selected(&self, zone: &str) -> bool {
        self.selected == zone
    }
}
