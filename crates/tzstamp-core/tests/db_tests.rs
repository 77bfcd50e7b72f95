use rusqlite::Connection;
use tempfile::NamedTempFile;
use tzstamp_core::Database;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());
}

#[test]
fn test_missing_preference_is_none() {
    let (_temp_file, db) = create_test_db();
    assert_eq!(db.get_preference("display_zone").unwrap(), None);
    assert_eq!(db.get_preference_entry("display_zone").unwrap(), None);
}

#[test]
fn test_set_and_get_preference() {
    let (_temp_file, mut db) = create_test_db();

    db.set_preference("display_zone", "America/New_York")
        .expect("Failed to store preference");

    let entry = db
        .get_preference_entry("display_zone")
        .expect("Failed to read preference")
        .expect("Preference should exist");
    assert_eq!(entry.value, "America/New_York");
    assert!(entry.updated_at.is_some());
}

#[test]
fn test_set_preference_overwrites() {
    let (_temp_file, mut db) = create_test_db();

    db.set_preference("display_zone", "UTC").unwrap();
    db.set_preference("display_zone", "Asia/Tehran").unwrap();

    assert_eq!(
        db.get_preference("display_zone").unwrap().as_deref(),
        Some("Asia/Tehran")
    );
}

#[test]
fn test_preferences_are_keyed() {
    let (_temp_file, mut db) = create_test_db();

    db.set_preference("display_zone", "UTC").unwrap();
    db.set_preference("theme", "dark").unwrap();

    assert_eq!(db.get_preference("display_zone").unwrap().as_deref(), Some("UTC"));
    assert_eq!(db.get_preference("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_delete_preference() {
    let (_temp_file, mut db) = create_test_db();

    db.set_preference("display_zone", "UTC").unwrap();
    assert!(db.delete_preference("display_zone").unwrap());
    assert!(!db.delete_preference("display_zone").unwrap());
    assert_eq!(db.get_preference("display_zone").unwrap(), None);
}

#[test]
fn test_preference_survives_reopen() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let mut db = Database::new(temp_file.path()).unwrap();
        db.set_preference("display_zone", "Europe/London").unwrap();
    }

    let db = Database::new(temp_file.path()).unwrap();
    assert_eq!(
        db.get_preference("display_zone").unwrap().as_deref(),
        Some("Europe/London")
    );
}

#[test]
fn test_migrates_table_without_updated_at() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE preferences (key TEXT PRIMARY KEY NOT NULL, value TEXT NOT NULL);
             INSERT INTO preferences (key, value) VALUES ('display_zone', 'Asia/Tokyo');",
        )
        .unwrap();
    }

    let mut db = Database::new(temp_file.path()).expect("Migration should succeed");
    let entry = db.get_preference_entry("display_zone").unwrap().unwrap();
    assert_eq!(entry.value, "Asia/Tokyo");
    assert_eq!(entry.updated_at, None);

    db.set_preference("display_zone", "UTC").unwrap();
    let entry = db.get_preference_entry("display_zone").unwrap().unwrap();
    assert!(entry.updated_at.is_some());
}
