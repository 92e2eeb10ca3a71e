//! Integration tests for the SQLite store.

use agenda_core::{
    error::AgendaError,
    models::ItemRecord,
    reconcile::ItemBatch,
    store::{Database, ItemStore, SqliteStore},
    ClockTime,
};
use jiff::Timestamp;
use tempfile::TempDir;

fn test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::new(temp_dir.path().join("test.db")).expect("Failed to open database");
    (temp_dir, db)
}

fn record(item_id: &str, event_id: &str, day: u32, position: u32) -> ItemRecord {
    let now = Timestamp::now();
    ItemRecord {
        item_id: item_id.to_string(),
        event_id: event_id.to_string(),
        topic: format!("Topic {item_id}"),
        notes: Some(String::new()),
        duration_min: 30,
        day,
        position,
        begins_at: Some("09:00".to_string()),
        ends_at: Some("09:30".to_string()),
        filler: Some(false),
        created_at: now,
        updated_at: now,
    }
}

fn batch(event_id: &str, items: Vec<ItemRecord>) -> ItemBatch {
    ItemBatch {
        event_id: event_id.to_string(),
        origin_item_id: None,
        items,
    }
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("test.db");
    drop(Database::new(&path).expect("first open"));
    drop(Database::new(&path).expect("second open"));
}

#[test]
fn test_create_and_get_event() {
    let (_temp_dir, mut db) = test_db();

    let created = db
        .create_event("evt-1", "Conference", 2, &[ClockTime::new(9, 0)])
        .expect("Failed to create event");
    assert_eq!(created.day_count, 2);

    let fetched = db
        .get_event("evt-1")
        .expect("Failed to get event")
        .expect("Event should exist");
    assert_eq!(fetched.name, "Conference");
    assert_eq!(fetched.day_starts, vec![ClockTime::new(9, 0)]);
}

#[test]
fn test_get_event_not_found() {
    let (_temp_dir, db) = test_db();
    assert!(db.get_event("ghost").expect("query should work").is_none());
}

#[test]
fn test_list_events() {
    let (_temp_dir, mut db) = test_db();
    db.create_event("evt-1", "First", 1, &[]).expect("create");
    db.create_event("evt-2", "Second", 1, &[]).expect("create");

    let events = db.list_events().expect("Failed to list events");
    assert_eq!(events.len(), 2);
}

#[test]
fn test_upsert_requires_existing_event() {
    let (_temp_dir, mut db) = test_db();

    let result = db.upsert_items(&batch("ghost", vec![record("itm-1", "ghost", 0, 0)]));
    assert!(matches!(result, Err(AgendaError::EventNotFound { .. })));
}

#[test]
fn test_upsert_and_list_items() {
    let (_temp_dir, mut db) = test_db();
    db.create_event("evt-1", "Conference", 1, &[]).expect("create");

    let stored = db
        .upsert_items(&batch(
            "evt-1",
            vec![record("itm-1", "evt-1", 0, 0), record("itm-2", "evt-1", 0, 1)],
        ))
        .expect("Failed to upsert");
    assert_eq!(stored.len(), 2);

    let listed = db.list_items("evt-1").expect("Failed to list items");
    assert_eq!(listed.len(), 2);
}

#[test]
fn test_upsert_is_idempotent_per_item_id() {
    let (_temp_dir, mut db) = test_db();
    db.create_event("evt-1", "Conference", 1, &[]).expect("create");

    let first = db
        .upsert_items(&batch("evt-1", vec![record("itm-1", "evt-1", 0, 0)]))
        .expect("first upsert");

    // Same id again, moved to a new position: one row, updated in place,
    // creation timestamp preserved.
    let mut moved = record("itm-1", "evt-1", 0, 3);
    moved.topic = "Renamed".to_string();
    let second = db
        .upsert_items(&batch("evt-1", vec![moved]))
        .expect("second upsert");

    assert_eq!(second.len(), 1);
    assert_eq!(second[0].topic, "Renamed");
    assert_eq!(second[0].position, 3);
    assert_eq!(second[0].created_at, first[0].created_at);

    let listed = db.list_items("evt-1").expect("list");
    assert_eq!(listed.len(), 1);
}

#[test]
fn test_upsert_stamps_updated_at() {
    let (_temp_dir, mut db) = test_db();
    db.create_event("evt-1", "Conference", 1, &[]).expect("create");

    let mut stale = record("itm-1", "evt-1", 0, 0);
    stale.updated_at = "2001-01-01T00:00:00Z".parse().expect("timestamp");
    let stored = db
        .upsert_items(&batch("evt-1", vec![stale]))
        .expect("upsert");

    // The store, not the client, owns updated_at.
    assert!(stored[0].updated_at > "2001-01-02T00:00:00Z".parse().expect("timestamp"));
}

#[test]
fn test_delete_item() {
    let (_temp_dir, mut db) = test_db();
    db.create_event("evt-1", "Conference", 1, &[]).expect("create");
    db.upsert_items(&batch("evt-1", vec![record("itm-1", "evt-1", 0, 0)]))
        .expect("upsert");

    assert!(db.delete_item("evt-1", "itm-1").expect("delete"));
    assert!(!db.delete_item("evt-1", "itm-1").expect("second delete"));
    assert!(db.list_items("evt-1").expect("list").is_empty());
}

#[test]
fn test_delete_event_cascades_to_items() {
    let (_temp_dir, mut db) = test_db();
    db.create_event("evt-1", "Conference", 1, &[]).expect("create");
    db.upsert_items(&batch("evt-1", vec![record("itm-1", "evt-1", 0, 0)]))
        .expect("upsert");

    assert!(db.delete_event("evt-1").expect("delete event"));
    assert!(db.list_items("evt-1").expect("list").is_empty());
}

#[tokio::test]
async fn test_sqlite_store_trait_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("test.db");
    {
        let mut db = Database::new(&path).expect("open");
        db.create_event("evt-1", "Conference", 1, &[]).expect("create");
    }

    let store = SqliteStore::new(path);
    let stored = store
        .upsert_items(batch("evt-1", vec![record("itm-1", "evt-1", 0, 0)]))
        .await
        .expect("upsert");
    assert_eq!(stored.len(), 1);

    let listed = store.list_items("evt-1").await.expect("list");
    assert_eq!(listed, stored);

    assert!(store.delete_item("evt-1", "itm-1").await.expect("delete"));
}
