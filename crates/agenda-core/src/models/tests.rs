//! Tests for the model converters.

use jiff::Timestamp;

use super::*;
use crate::schedule::time::ClockTime;

fn sample_item() -> AgendaItem {
    let now = Timestamp::now();
    AgendaItem {
        id: "itm-1".to_string(),
        event_id: "evt-1".to_string(),
        topic: "Opening keynote".to_string(),
        description: "Welcome and logistics".to_string(),
        duration_minutes: 45,
        day_index: 0,
        order: 0,
        start_time: ClockTime::new(9, 0),
        end_time: ClockTime::new(9, 45),
        is_filler: false,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_record_round_trip() {
    let item = sample_item();
    let round_tripped = item.to_record().to_canonical();
    assert_eq!(round_tripped, item);
}

#[test]
fn test_record_round_trip_filler() {
    let mut item = sample_item();
    item.is_filler = true;
    item.description = String::new();
    assert_eq!(item.to_record().to_canonical(), item);
}

#[test]
fn test_to_record_never_emits_absent_fields() {
    let record = sample_item().to_record();
    assert!(record.notes.is_some());
    assert!(record.begins_at.is_some());
    assert!(record.ends_at.is_some());
    assert!(record.filler.is_some());
}

#[test]
fn test_to_canonical_defaults_missing_fields() {
    let now = Timestamp::now();
    let record = ItemRecord {
        item_id: "itm-2".to_string(),
        event_id: "evt-1".to_string(),
        topic: "Lunch".to_string(),
        notes: None,
        duration_min: 60,
        day: 1,
        position: 2,
        begins_at: None,
        ends_at: None,
        filler: None,
        created_at: now,
        updated_at: now,
    };

    let item = record.to_canonical();
    assert_eq!(item.description, "");
    assert_eq!(item.start_time, ClockTime::MIDNIGHT);
    assert_eq!(item.end_time, ClockTime::MIDNIGHT);
    assert!(!item.is_filler);
}

#[test]
fn test_to_canonical_defaults_unparseable_time() {
    let now = Timestamp::now();
    let record = ItemRecord {
        item_id: "itm-3".to_string(),
        event_id: "evt-1".to_string(),
        topic: "Panel".to_string(),
        notes: Some("Q&A".to_string()),
        duration_min: 30,
        day: 0,
        position: 1,
        begins_at: Some("not-a-time".to_string()),
        ends_at: Some("09:75".to_string()),
        filler: Some(false),
        created_at: now,
        updated_at: now,
    };

    let item = record.to_canonical();
    assert_eq!(item.start_time, ClockTime::MIDNIGHT);
    assert_eq!(item.end_time, ClockTime::MIDNIGHT);
}

#[test]
fn test_event_day_start_defaults_to_midnight() {
    let now = Timestamp::now();
    let event = Event {
        id: "evt-1".to_string(),
        name: "Conference".to_string(),
        day_count: 3,
        day_starts: vec![ClockTime::new(9, 0), ClockTime::new(10, 0)],
        created_at: now,
        updated_at: now,
    };

    assert_eq!(event.day_start(0), ClockTime::new(9, 0));
    assert_eq!(event.day_start(1), ClockTime::new(10, 0));
    assert_eq!(event.day_start(2), ClockTime::MIDNIGHT);
}
