//! Pure reorder transforms over an [`EventSchedule`].
//!
//! Every operation takes the schedule by shared reference and returns a new,
//! fully consistent value; the receiver is never mutated. Immutability keeps
//! optimistic-update rollback trivial: the caller simply keeps the previous
//! value until the reconciler confirms the new one.

use super::EventSchedule;
use crate::error::{AgendaError, Result};
use crate::models::AgendaItem;
use crate::params::{MoveIntent, NudgeDirection};

impl EventSchedule {
    /// Applies a single reorder intent, returning the new schedule.
    ///
    /// Affected days come back re-indexed `0..n-1` and recalculated from
    /// their configured start times. An intent naming an item id that is not
    /// in the day it claims fails with [`AgendaError::ItemNotFound`]; an
    /// out-of-range `from_index` fails with [`AgendaError::InvalidInput`].
    /// Target indices are clamped, never rejected.
    pub fn apply_move(&self, intent: &MoveIntent) -> Result<Self> {
        match intent {
            MoveIntent::WithinDay {
                day,
                from_index,
                to_index,
            } => self.move_within_day(*day, *from_index, *to_index),
            MoveIntent::AcrossDays {
                item_id,
                from_day,
                to_day,
                to_index,
            } => self.move_across_days(item_id, *from_day, *to_day, *to_index),
            MoveIntent::Nudge { item_id, direction } => self.nudge(item_id, *direction),
        }
    }

    /// Deletes an item, re-indexing and recalculating only its former day.
    pub fn apply_delete(&self, item_id: &str) -> Result<Self> {
        let (day, index) = self
            .find_item(item_id)
            .ok_or_else(|| AgendaError::item_not_found(item_id, None))?;

        let mut next = self.clone();
        if let Some(items) = next.days.get_mut(&day) {
            items.remove(index);
        }
        next.normalize_day(day);
        Ok(next)
    }

    /// Inserts a freshly created item at the end of its day.
    ///
    /// The provisional order the item was created with is overwritten by the
    /// re-index; times are derived during the same pass.
    #[must_use]
    pub fn insert_item(&self, item: AgendaItem) -> Self {
        let day = item.day_index;
        let mut next = self.clone();
        next.days.entry(day).or_default().push(item);
        next.normalize_day(day);
        next
    }

    /// Applies a content edit (topic, description, duration) to one item and
    /// recalculates its day. Edits never reorder.
    pub fn edit_item(
        &self,
        item_id: &str,
        edit: impl FnOnce(&mut AgendaItem),
    ) -> Result<Self> {
        let (day, index) = self
            .find_item(item_id)
            .ok_or_else(|| AgendaError::item_not_found(item_id, None))?;

        let mut next = self.clone();
        if let Some(item) = next.days.get_mut(&day).and_then(|items| items.get_mut(index)) {
            edit(item);
        }
        next.normalize_day(day);
        Ok(next)
    }

    fn move_within_day(&self, day: u32, from_index: usize, to_index: usize) -> Result<Self> {
        let len = self.day(day).len();
        if from_index >= len {
            return Err(AgendaError::invalid_input(
                "from_index",
                format!("Index {from_index} is out of range. Day {day} has {len} items"),
            ));
        }

        let mut next = self.clone();
        if let Some(items) = next.days.get_mut(&day) {
            let item = items.remove(from_index);
            let target = to_index.min(items.len());
            items.insert(target, item);
        }
        next.normalize_day(day);
        Ok(next)
    }

    fn move_across_days(
        &self,
        item_id: &str,
        from_day: u32,
        to_day: u32,
        to_index: usize,
    ) -> Result<Self> {
        // The intent claims the item lives in `from_day`; anything else is a
        // desync, not a case to paper over.
        let from_index = self
            .day(from_day)
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| AgendaError::item_not_found(item_id, from_day))?;

        if from_day == to_day {
            return self.move_within_day(from_day, from_index, to_index);
        }

        let mut next = self.clone();
        let mut item = match next.days.get_mut(&from_day) {
            Some(items) => items.remove(from_index),
            None => return Err(AgendaError::item_not_found(item_id, from_day)),
        };
        item.day_index = to_day;

        let target_items = next.days.entry(to_day).or_default();
        let target = to_index.min(target_items.len());
        target_items.insert(target, item);

        // The source day shrank but its remaining items must still run
        // contiguously from the day start.
        next.normalize_day(from_day);
        next.normalize_day(to_day);
        Ok(next)
    }

    fn nudge(&self, item_id: &str, direction: NudgeDirection) -> Result<Self> {
        let (day, index) = self
            .find_item(item_id)
            .ok_or_else(|| AgendaError::item_not_found(item_id, None))?;
        let len = self.day(day).len();
        self.move_within_day(day, index, direction.target_index(index, len))
    }
}
