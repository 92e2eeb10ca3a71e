//! Persisted item record shape and converters.
//!
//! The store speaks a different field-naming convention than the canonical
//! model (`notes` vs `description`, `position` vs `order`, and so on). The
//! two shapes are kept as disjoint types with total two-way converters
//! rather than ad hoc field copying: `to_record(x).to_canonical() == x` for
//! every valid canonical item.

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use super::AgendaItem;
use crate::schedule::time::ClockTime;

/// An agenda item in its persisted shape.
///
/// Optional fields may legitimately be absent in stored rows; conversion to
/// the canonical shape defaults them and logs an advisory, it never fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub item_id: String,
    pub event_id: String,
    pub topic: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub duration_min: u32,
    pub day: u32,
    pub position: u32,
    #[serde(default)]
    pub begins_at: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub filler: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ItemRecord {
    /// Converts the persisted shape into the canonical [`AgendaItem`].
    ///
    /// Total: absent `notes` becomes an empty description, absent `filler`
    /// becomes `false`, and absent or unparseable times fall back to
    /// `"00:00"`. Times are derived fields, so a fallback here is corrected
    /// by the next recalculation.
    pub fn to_canonical(self) -> AgendaItem {
        let parse_time = |field: &str, value: Option<String>| -> ClockTime {
            match value {
                Some(raw) => raw.parse().unwrap_or_else(|_| {
                    debug!("item {}: unparseable {field} '{raw}', defaulting to 00:00", self.item_id);
                    ClockTime::MIDNIGHT
                }),
                None => {
                    debug!("item {}: missing {field}, defaulting to 00:00", self.item_id);
                    ClockTime::MIDNIGHT
                }
            }
        };

        if self.notes.is_none() {
            debug!("item {}: missing notes, defaulting to empty", self.item_id);
        }

        AgendaItem {
            id: self.item_id.clone(),
            event_id: self.event_id.clone(),
            topic: self.topic.clone(),
            description: self.notes.clone().unwrap_or_default(),
            duration_minutes: self.duration_min,
            day_index: self.day,
            order: self.position,
            start_time: parse_time("begins_at", self.begins_at.clone()),
            end_time: parse_time("ends_at", self.ends_at.clone()),
            is_filler: self.filler.unwrap_or(false),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl AgendaItem {
    /// Converts the canonical shape into the persisted [`ItemRecord`].
    ///
    /// Every optional record field is populated so the store never receives
    /// a NULL in a column the schema expects filled.
    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            item_id: self.id.clone(),
            event_id: self.event_id.clone(),
            topic: self.topic.clone(),
            notes: Some(self.description.clone()),
            duration_min: self.duration_minutes,
            day: self.day_index,
            position: self.order,
            begins_at: Some(self.start_time.to_string()),
            ends_at: Some(self.end_time.to_string()),
            filler: Some(self.is_filler),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
