//! Batch reconciliation between optimistic schedules and the store.
//!
//! After a reorder operation produces a new [`EventSchedule`], the whole
//! recomputed item set is persisted as one batch; partial batches are never
//! sent. The [`Reconciler`] keeps the last *confirmed* schedule around until
//! the store acknowledges the new one, so a caller showing the optimistic
//! value can always roll back on failure. On success the store's rows, not
//! the local computation, become the new confirmed state; this defends
//! against server-side normalization differing subtly from the client's.

use log::debug;

use crate::error::{AgendaError, Result};
use crate::models::ItemRecord;
use crate::schedule::EventSchedule;
use crate::store::ItemStore;

/// One persistence request: the full recomputed item set of an event.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBatch {
    /// Owning event
    pub event_id: String,
    /// The item whose move triggered this batch; diagnostic only, never
    /// used for ordering decisions
    pub origin_item_id: Option<String>,
    /// Every item of the event, in persisted shape
    pub items: Vec<ItemRecord>,
}

impl ItemBatch {
    /// Builds a batch from a schedule, validating before anything is sent.
    ///
    /// Every item must carry a non-empty id; a single violation rejects the
    /// whole batch. Conversion to the record shape fills every optional
    /// field, so the store never sees a NULL in a column it expects filled.
    pub fn build(schedule: &EventSchedule, origin_item_id: Option<&str>) -> Result<Self> {
        let items = schedule.items();
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(AgendaError::invalid_input(
                    "id",
                    format!(
                        "Item '{}' in day {} has no id; batch rejected",
                        item.topic, item.day_index
                    ),
                ));
            }
        }

        Ok(Self {
            event_id: schedule.event_id().to_string(),
            origin_item_id: origin_item_id.map(String::from),
            items: items.iter().map(|item| item.to_record()).collect(),
        })
    }
}

/// Reconciles optimistic schedule values against an [`ItemStore`].
///
/// Batches are ordered by dispatch sequence, not arrival: a response that
/// comes back after a newer batch has already been applied is discarded
/// rather than applied (last-writer-wins, single-editor model).
pub struct Reconciler<S> {
    store: S,
    confirmed: EventSchedule,
    next_seq: u64,
    applied_seq: Option<u64>,
}

impl<S: ItemStore> Reconciler<S> {
    /// Creates a reconciler seeded with the last known confirmed schedule.
    pub fn new(store: S, confirmed: EventSchedule) -> Self {
        Self {
            store,
            confirmed,
            next_seq: 0,
            applied_seq: None,
        }
    }

    /// The last schedule the store has confirmed. This is the rollback
    /// target while an optimistic value is on screen.
    pub fn confirmed(&self) -> &EventSchedule {
        &self.confirmed
    }

    /// Consumes the reconciler, yielding the confirmed schedule.
    pub fn into_confirmed(self) -> EventSchedule {
        self.confirmed
    }

    /// Persists `next` as a single batch and returns the confirmed state.
    ///
    /// Validation failures reject the batch before any dispatch; store
    /// failures leave the previously confirmed schedule untouched, so the
    /// caller can revert its optimistic view. On success the returned state
    /// is rebuilt from the store's own rows, re-grouped per day.
    pub async fn reconcile(
        &mut self,
        next: &EventSchedule,
        origin_item_id: Option<&str>,
    ) -> Result<&EventSchedule> {
        let batch = ItemBatch::build(next, origin_item_id)?;

        let seq = self.next_seq;
        self.next_seq += 1;

        let stored = self.store.upsert_items(batch).await?;
        self.apply_response(seq, stored);

        Ok(&self.confirmed)
    }

    /// Applies a store response, unless a newer batch already landed.
    /// Returns whether the response was applied.
    fn apply_response(&mut self, seq: u64, stored: Vec<ItemRecord>) -> bool {
        if self.applied_seq.is_some_and(|applied| seq < applied) {
            debug!(
                "discarding superseded batch response (seq {seq}, applied {:?})",
                self.applied_seq
            );
            return false;
        }

        self.applied_seq = Some(seq);
        let items = stored.into_iter().map(ItemRecord::to_canonical).collect();
        self.confirmed = EventSchedule::from_items(
            self.confirmed.event_id().to_string(),
            self.confirmed.day_starts().to_vec(),
            items,
        );
        true
    }
}
