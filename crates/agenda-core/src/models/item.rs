//! Canonical agenda item model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::schedule::time::ClockTime;

/// Represents a single timed item on an event's agenda.
///
/// `start_time` and `end_time` are derived fields: they are recomputed from
/// the item's position and duration whenever the owning day changes, and are
/// never set directly by callers of the reordering API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaItem {
    /// Opaque unique identifier, assigned at creation
    pub id: String,

    /// ID of the owning event
    pub event_id: String,

    /// Display text for the item (non-empty)
    pub topic: String,

    /// Optional free-form text; empty string when absent
    #[serde(default)]
    pub description: String,

    /// Positive length of the item in minutes, the only independently
    /// settable time attribute
    pub duration_minutes: u32,

    /// Which day of the event this item belongs to (0 = first day)
    pub day_index: u32,

    /// Zero-based rank within the `(event_id, day_index)` partition; the
    /// sole source of truth for display sequence
    pub order: u32,

    /// Derived start of the item's time window
    pub start_time: ClockTime,

    /// Derived end of the item's time window
    pub end_time: ClockTime,

    /// Marks non-schedulable placeholders such as breaks; fillers order and
    /// schedule exactly like regular items
    #[serde(default)]
    pub is_filler: bool,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last updated (UTC)
    pub updated_at: Timestamp,
}
