//! Time recalculation for one day's ordered items.

use log::warn;

use super::time::ClockTime;
use crate::models::AgendaItem;

/// Recomputes `start_time`/`end_time` for a day already in final order.
///
/// A cursor starts at `day_start`; each item begins at the cursor and
/// advances it by its duration, yielding contiguous, non-overlapping blocks.
/// The engine performs no validation and will propagate garbage for garbage
/// input; rejecting non-positive durations is the callers' responsibility
/// (see [`crate::params`]). Idempotent over the same ordered sequence.
///
/// A cursor past `24:00` is flagged with a warning and left unwrapped; the
/// resulting times render as `"24:15"` style values.
pub fn recalculate_day(items: &mut [AgendaItem], day_start: ClockTime) {
    let mut cursor = day_start;
    for item in items.iter_mut() {
        item.start_time = cursor;
        cursor = cursor.add_minutes(item.duration_minutes);
        item.end_time = cursor;
    }

    if cursor.is_past_day_end() {
        if let Some(last) = items.last() {
            warn!(
                "day {} of event {} runs past midnight (ends {})",
                last.day_index, last.event_id, cursor
            );
        }
    }
}
