//! Item operations for the Agenda facade.
//!
//! Every mutation runs the same pipeline: hydrate the confirmed schedule,
//! apply a pure transform, persist the whole recomputed item set as one
//! batch through the reconciler, and return the store-confirmed result.

use jiff::Timestamp;
use log::warn;

use super::{mint_id, Agenda};
use crate::error::{AgendaError, Result};
use crate::models::{AgendaItem, Event, ItemRecord};
use crate::params::{CreateItem, MoveIntent, NudgeDirection, UpdateItem};
use crate::reconcile::Reconciler;
use crate::schedule::time::ClockTime;
use crate::schedule::EventSchedule;
use crate::store::{ItemStore, SqliteStore};

impl Agenda {
    /// Hydrates the confirmed schedule of an event from the store.
    ///
    /// Stored rows carry no ordering guarantee, so day grouping and
    /// normalization are applied on every load.
    pub async fn load_schedule(&self, event_id: &str) -> Result<EventSchedule> {
        let event = self.require_event(event_id).await?;
        let store = self.store();
        let records = store.list_items(event_id).await?;
        let items = records.into_iter().map(ItemRecord::to_canonical).collect();
        Ok(EventSchedule::from_items(
            event.id,
            event.day_starts,
            items,
        ))
    }

    /// Creates a new item at the end of its target day and returns its
    /// stored representation, times derived.
    pub async fn add_item(&self, params: &CreateItem) -> Result<AgendaItem> {
        params.validate()?;

        let event = self.require_event(&params.event_id).await?;
        if params.day_index >= event.day_count {
            return Err(AgendaError::invalid_input(
                "day_index",
                format!(
                    "Day {} is out of range. Event '{}' has {} days",
                    params.day_index, event.name, event.day_count
                ),
            ));
        }

        let confirmed = self.load_schedule(&params.event_id).await?;
        let now = Timestamp::now();
        let item = AgendaItem {
            id: mint_id("itm"),
            event_id: params.event_id.clone(),
            topic: params.topic.clone(),
            description: params.description.clone().unwrap_or_default(),
            duration_minutes: params.duration_minutes,
            day_index: params.day_index,
            // Provisional end-of-day rank; the insert re-indexes.
            order: confirmed.day(params.day_index).len() as u32,
            start_time: ClockTime::MIDNIGHT,
            end_time: ClockTime::MIDNIGHT,
            is_filler: params.is_filler,
            created_at: now,
            updated_at: now,
        };
        let item_id = item.id.clone();

        let next = confirmed.insert_item(item);
        let confirmed = self.persist(confirmed, &next, Some(&item_id)).await?;

        confirmed
            .find_item(&item_id)
            .map(|(day, index)| confirmed.day(day)[index].clone())
            .ok_or_else(|| AgendaError::item_not_found(item_id, None))
    }

    /// Edits an item's content fields (topic, description, duration) and
    /// returns its stored representation. Duration changes recalculate the
    /// item's day; nothing is reordered.
    pub async fn update_item(&self, params: &UpdateItem) -> Result<AgendaItem> {
        params.validate()?;

        let confirmed = self.load_schedule(&params.event_id).await?;
        if params.is_noop() {
            let (day, index) = confirmed
                .find_item(&params.item_id)
                .ok_or_else(|| AgendaError::item_not_found(params.item_id.clone(), None))?;
            return Ok(confirmed.day(day)[index].clone());
        }

        let next = confirmed.edit_item(&params.item_id, |item| {
            if let Some(topic) = &params.topic {
                item.topic = topic.clone();
            }
            if let Some(description) = &params.description {
                item.description = description.clone();
            }
            if let Some(duration) = params.duration_minutes {
                item.duration_minutes = duration;
            }
        })?;

        let confirmed = self.persist(confirmed, &next, Some(&params.item_id)).await?;
        confirmed
            .find_item(&params.item_id)
            .map(|(day, index)| confirmed.day(day)[index].clone())
            .ok_or_else(|| AgendaError::item_not_found(params.item_id.clone(), None))
    }

    /// Applies a reorder intent and returns the confirmed schedule.
    ///
    /// Cross-day intents must target a day the event actually has; the
    /// engine itself accepts any day index, so the range check lives here,
    /// next to the event.
    pub async fn move_item(&self, event_id: &str, intent: &MoveIntent) -> Result<EventSchedule> {
        if let MoveIntent::AcrossDays { to_day, .. } = intent {
            let event = self.require_event(event_id).await?;
            if *to_day >= event.day_count {
                return Err(AgendaError::invalid_input(
                    "to_day",
                    format!(
                        "Day {} is out of range. Event '{}' has {} days",
                        to_day, event.name, event.day_count
                    ),
                ));
            }
        }

        let confirmed = self.load_schedule(event_id).await?;

        let origin = match intent {
            MoveIntent::WithinDay {
                day, from_index, ..
            } => confirmed
                .day(*day)
                .get(*from_index)
                .map(|item| item.id.clone()),
            MoveIntent::AcrossDays { item_id, .. } | MoveIntent::Nudge { item_id, .. } => {
                Some(item_id.clone())
            }
        };

        let next = confirmed.apply_move(intent)?;
        self.persist(confirmed, &next, origin.as_deref()).await
    }

    /// Moves an item one step or to an extreme within its own day.
    pub async fn nudge_item(
        &self,
        event_id: &str,
        item_id: &str,
        direction: NudgeDirection,
    ) -> Result<EventSchedule> {
        self.move_item(
            event_id,
            &MoveIntent::Nudge {
                item_id: item_id.to_string(),
                direction,
            },
        )
        .await
    }

    /// Deletes an item, re-indexes and recalculates its former day, and
    /// returns the confirmed schedule.
    pub async fn delete_item(&self, event_id: &str, item_id: &str) -> Result<EventSchedule> {
        let confirmed = self.load_schedule(event_id).await?;
        let next = confirmed.apply_delete(item_id)?;

        let store = self.store();
        let removed = store.delete_item(event_id, item_id).await?;
        if !removed {
            // The row was already gone server-side; the end state is the
            // same, so the batch below still reconciles the survivors.
            warn!("item {item_id} was already absent from the store");
        }

        self.persist(confirmed, &next, Some(item_id)).await
    }

    fn store(&self) -> SqliteStore {
        SqliteStore::new(self.db_path.clone())
    }

    async fn require_event(&self, event_id: &str) -> Result<Event> {
        self.get_event(event_id)
            .await?
            .ok_or_else(|| AgendaError::EventNotFound {
                id: event_id.to_string(),
            })
    }

    /// Persists `next` as one batch; on success the store-confirmed value is
    /// returned, on failure `confirmed` stays the rollback target.
    async fn persist(
        &self,
        confirmed: EventSchedule,
        next: &EventSchedule,
        origin: Option<&str>,
    ) -> Result<EventSchedule> {
        let mut reconciler = Reconciler::new(self.store(), confirmed);
        reconciler.reconcile(next, origin).await?;
        Ok(reconciler.into_confirmed())
    }
}
