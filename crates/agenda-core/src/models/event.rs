//! Event model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::schedule::time::ClockTime;

/// An event whose agenda the engine schedules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Unique identifier for the event
    pub id: String,

    /// Display name of the event
    pub name: String,

    /// Number of days the event spans
    pub day_count: u32,

    /// Configured start time per day, indexed by day; days without an entry
    /// start at midnight
    #[serde(default)]
    pub day_starts: Vec<ClockTime>,

    /// Timestamp when the event was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the event was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Event {
    /// Start time configured for `day`, defaulting to `00:00`.
    pub fn day_start(&self, day: u32) -> ClockTime {
        self.day_starts
            .get(day as usize)
            .copied()
            .unwrap_or(ClockTime::MIDNIGHT)
    }
}
