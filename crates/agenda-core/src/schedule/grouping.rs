//! Day grouping for flat item collections.

use std::collections::BTreeMap;

use crate::models::AgendaItem;

/// Partitions a flat item collection into day-indexed groups, each sorted by
/// `order`.
///
/// The input may carry inconsistent or duplicate `order` values (mid-drag
/// state, unordered store results); ties are broken by the items' original
/// positions via a stable sort, so the output is deterministic. Pure:
/// callers decide whether the result is persisted.
pub fn group_by_day(items: Vec<AgendaItem>) -> BTreeMap<u32, Vec<AgendaItem>> {
    let mut days: BTreeMap<u32, Vec<AgendaItem>> = BTreeMap::new();
    for item in items {
        days.entry(item.day_index).or_default().push(item);
    }
    for group in days.values_mut() {
        group.sort_by_key(|item| item.order);
    }
    days
}
