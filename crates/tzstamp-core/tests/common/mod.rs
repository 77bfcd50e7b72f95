use tempfile::TempDir;
use tzstamp_core::{Database, SystemZoneDetector, ZonePreference, ZonePreferenceBuilder};

/// Helper function to create a database-backed preference in a fresh directory
pub fn create_test_preference() -> (TempDir, ZonePreference<Database, SystemZoneDetector>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("prefs.db");
    let preference = ZonePreferenceBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create preference");
    (temp_dir, preference)
}
