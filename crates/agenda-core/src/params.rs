//! Parameter structures for agenda operations.
//!
//! These structures are the interface-neutral request shapes passed into the
//! [`crate::agenda::Agenda`] facade and the pure scheduling transforms. They
//! carry no framework-specific derives; the CLI wraps them with its own
//! `clap` argument types and converts via `From`/accessors. Validation that
//! must happen before any recalculation (non-empty topics, positive
//! durations) lives here as `validate` methods.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};
use crate::schedule::time::ClockTime;

/// Longest accepted item duration: one full day. Overlong agendas come from
/// many items stacking up, never from a single absurd duration.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

fn validate_duration(duration_minutes: u32) -> Result<()> {
    if duration_minutes == 0 {
        return Err(AgendaError::invalid_input(
            "duration_minutes",
            "Item duration must be a positive number of minutes",
        ));
    }
    if duration_minutes > MAX_DURATION_MINUTES {
        return Err(AgendaError::invalid_input(
            "duration_minutes",
            format!("Item duration must not exceed {MAX_DURATION_MINUTES} minutes"),
        ));
    }
    Ok(())
}

/// Parameters for creating a new event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Display name of the event (required, non-empty)
    pub name: String,
    /// Number of days the event spans
    pub day_count: u32,
    /// Optional start time per day; days without an entry start at 00:00
    #[serde(default)]
    pub day_starts: Vec<ClockTime>,
}

impl CreateEvent {
    /// Validates the parameters before any store access.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AgendaError::invalid_input("name", "Event name must not be empty"));
        }
        if self.day_count == 0 {
            return Err(AgendaError::invalid_input(
                "day_count",
                "An event spans at least one day",
            ));
        }
        if self.day_starts.len() > self.day_count as usize {
            return Err(AgendaError::invalid_input(
                "day_starts",
                format!(
                    "{} start times configured for a {}-day event",
                    self.day_starts.len(),
                    self.day_count
                ),
            ));
        }
        Ok(())
    }
}

/// Parameters for creating a new agenda item.
///
/// The new item lands at the end of its target day with a provisional order;
/// its times are derived during the insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItem {
    /// ID of the owning event
    pub event_id: String,
    /// Display text for the item (required, non-empty)
    pub topic: String,
    /// Optional free-form text
    pub description: Option<String>,
    /// Positive length of the item in minutes
    pub duration_minutes: u32,
    /// Which day of the event the item belongs to (0 = first day)
    pub day_index: u32,
    /// Whether the item is a non-schedulable placeholder (break, buffer)
    #[serde(default)]
    pub is_filler: bool,
}

impl CreateItem {
    /// Validates the parameters before any recalculation or store access.
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(AgendaError::invalid_input("topic", "Item topic must not be empty"));
        }
        validate_duration(self.duration_minutes)
    }
}

/// Parameters for editing an existing item's content fields.
///
/// Only topic, description, and duration are editable directly; order, day,
/// and times change exclusively through reorder intents and recalculation. A
/// duration change triggers a recalculation of the item's day but no
/// reorder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    /// ID of the owning event
    pub event_id: String,
    /// ID of the item to update
    pub item_id: String,
    /// Updated display text
    pub topic: Option<String>,
    /// Updated free-form text
    pub description: Option<String>,
    /// Updated duration in minutes
    pub duration_minutes: Option<u32>,
}

impl UpdateItem {
    /// Validates the parameters before any recalculation or store access.
    pub fn validate(&self) -> Result<()> {
        if let Some(topic) = &self.topic {
            if topic.trim().is_empty() {
                return Err(AgendaError::invalid_input("topic", "Item topic must not be empty"));
            }
        }
        if let Some(duration) = self.duration_minutes {
            validate_duration(duration)?;
        }
        Ok(())
    }

    /// Whether the update carries any change at all.
    pub fn is_noop(&self) -> bool {
        self.topic.is_none() && self.description.is_none() && self.duration_minutes.is_none()
    }
}

/// A single reorder intent over one event's schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoveIntent {
    /// Move the item at `from_index` of `day` to `to_index` (clamped to the
    /// day's length)
    WithinDay {
        day: u32,
        from_index: usize,
        to_index: usize,
    },
    /// Move an item out of `from_day` into `to_day` at `to_index` (clamped)
    AcrossDays {
        item_id: String,
        from_day: u32,
        to_day: u32,
        to_index: usize,
    },
    /// Move an item one step or to an extreme within its own day
    Nudge {
        item_id: String,
        direction: NudgeDirection,
    },
}

/// Directional convenience transform over an item's own day.
///
/// Each direction is expressed as a within-day move with a computed target;
/// clamping makes a repeated `Up` at index 0 (or `Down` at the last index) a
/// no-op rather than an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NudgeDirection {
    Up,
    Down,
    Top,
    Bottom,
}

impl NudgeDirection {
    /// Target insertion index for an item currently at `index` in a day of
    /// `len` items.
    pub fn target_index(self, index: usize, len: usize) -> usize {
        match self {
            Self::Up => index.saturating_sub(1),
            Self::Down => (index + 1).min(len),
            Self::Top => 0,
            Self::Bottom => len,
        }
    }
}

impl FromStr for NudgeDirection {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(AgendaError::invalid_input(
                "direction",
                format!("Unknown direction '{other}'. Must be 'up', 'down', 'top', or 'bottom'"),
            )),
        }
    }
}
