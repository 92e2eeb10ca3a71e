//! The scheduling & reordering engine.
//!
//! An [`EventSchedule`] is an immutable value holding one event's agenda
//! items grouped by day. Every mutation (moves, nudges, deletes, inserts)
//! is a pure transform that returns a new schedule with the affected days
//! re-indexed and their times recomputed, so the value handed to a UI layer
//! always satisfies the ordering and contiguity invariants:
//!
//! - per day, `order` values are exactly `0..n-1`;
//! - per day, items run back to back from the day's start time with no gaps
//!   or overlaps, `end == start + duration`.
//!
//! The schedule never talks to the store; persisting a transformed value is
//! the [`crate::reconcile`] module's job.

use std::collections::BTreeMap;

use crate::models::AgendaItem;

pub mod grouping;
pub mod recalc;
pub mod reorder;
pub mod time;


use time::ClockTime;

/// One event's agenda, grouped by day and ordered within each day.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSchedule {
    event_id: String,
    day_starts: Vec<ClockTime>,
    days: BTreeMap<u32, Vec<AgendaItem>>,
}

impl EventSchedule {
    /// Builds a schedule from a flat, arbitrarily ordered item collection.
    ///
    /// Items are grouped per day, sorted by `order` (ties broken by original
    /// position), re-indexed, and recalculated, so the result holds the
    /// invariants even when the input came from a store that guarantees no
    /// ordering.
    pub fn from_items(
        event_id: impl Into<String>,
        day_starts: Vec<ClockTime>,
        items: Vec<AgendaItem>,
    ) -> Self {
        let mut schedule = Self {
            event_id: event_id.into(),
            day_starts,
            days: grouping::group_by_day(items),
        };
        let days: Vec<u32> = schedule.days.keys().copied().collect();
        for day in days {
            schedule.normalize_day(day);
        }
        schedule
    }

    /// Identifier of the owning event.
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// Configured per-day start times, as passed at construction.
    pub fn day_starts(&self) -> &[ClockTime] {
        &self.day_starts
    }

    /// Configured start time for `day`, defaulting to midnight.
    pub fn day_start(&self, day: u32) -> ClockTime {
        self.day_starts
            .get(day as usize)
            .copied()
            .unwrap_or(ClockTime::MIDNIGHT)
    }

    /// Items of `day` in display order; empty when the day has no items.
    pub fn day(&self, day: u32) -> &[AgendaItem] {
        self.days.get(&day).map_or(&[], Vec::as_slice)
    }

    /// All days that currently have items, in ascending day order.
    pub fn days(&self) -> impl Iterator<Item = (u32, &[AgendaItem])> {
        self.days.iter().map(|(day, items)| (*day, items.as_slice()))
    }

    /// Flattens the schedule back into a single item collection.
    pub fn items(&self) -> Vec<AgendaItem> {
        self.days.values().flatten().cloned().collect()
    }

    /// Total number of items across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Whether the schedule holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Locates an item anywhere in the schedule.
    pub fn find_item(&self, item_id: &str) -> Option<(u32, usize)> {
        self.days.iter().find_map(|(day, items)| {
            items
                .iter()
                .position(|item| item.id == item_id)
                .map(|index| (*day, index))
        })
    }

    /// Re-indexes and recalculates one day in place. Private: the public
    /// surface only exposes whole-schedule transforms.
    pub(crate) fn normalize_day(&mut self, day: u32) {
        let start = self.day_start(day);
        if let Some(items) = self.days.get_mut(&day) {
            if items.is_empty() {
                self.days.remove(&day);
                return;
            }
            for (index, item) in items.iter_mut().enumerate() {
                item.order = index as u32;
            }
            recalc::recalculate_day(items, start);
        }
    }
}
