//! Item CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, types::Type};

use crate::error::{AgendaError, DatabaseResultExt, Result};
use crate::models::ItemRecord;
use crate::reconcile::ItemBatch;

const UPSERT_ITEM_SQL: &str = "INSERT INTO items (item_id, event_id, topic, notes, duration_min, day, position, begins_at, ends_at, filler, created_at, updated_at) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12) \
     ON CONFLICT(item_id) DO UPDATE SET \
         topic = excluded.topic, \
         notes = excluded.notes, \
         duration_min = excluded.duration_min, \
         day = excluded.day, \
         position = excluded.position, \
         begins_at = excluded.begins_at, \
         ends_at = excluded.ends_at, \
         filler = excluded.filler, \
         updated_at = excluded.updated_at";
const SELECT_ITEM_SQL: &str = "SELECT item_id, event_id, topic, notes, duration_min, day, position, begins_at, ends_at, filler, created_at, updated_at FROM items WHERE item_id = ?1";
const SELECT_ITEMS_BY_EVENT_SQL: &str = "SELECT item_id, event_id, topic, notes, duration_min, day, position, begins_at, ends_at, filler, created_at, updated_at FROM items WHERE event_id = ?1 ORDER BY item_id";
const UPDATE_EVENT_TIMESTAMP_SQL: &str = "UPDATE events SET updated_at = ?1 WHERE event_id = ?2";
const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE event_id = ?1 AND item_id = ?2";

impl super::Database {
    /// Helper function to construct an ItemRecord from a database row
    fn build_record_from_row(row: &rusqlite::Row) -> rusqlite::Result<ItemRecord> {
        Ok(ItemRecord {
            item_id: row.get(0)?,
            event_id: row.get(1)?,
            topic: row.get(2)?,
            notes: row.get(3)?,
            duration_min: row.get::<_, i64>(4)? as u32,
            day: row.get::<_, i64>(5)? as u32,
            position: row.get::<_, i64>(6)? as u32,
            begins_at: row.get(7)?,
            ends_at: row.get(8)?,
            filler: Some(row.get::<_, i64>(9)? != 0),
            created_at: row.get::<_, String>(10)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(11)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Persists a validated batch in a single transaction.
    ///
    /// Upserts are keyed by `item_id`: repeated identical batches are safe,
    /// and `created_at` survives updates while `updated_at` is stamped here,
    /// making the returned rows the authoritative representation. The
    /// batch's origin item id is logged for diagnostics only.
    pub fn upsert_items(&mut self, batch: &ItemBatch) -> Result<Vec<ItemRecord>> {
        if let Some(origin) = &batch.origin_item_id {
            debug!(
                "upserting batch of {} items for event {} (moved item: {origin})",
                batch.items.len(),
                batch.event_id
            );
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !Self::event_exists(&tx, &batch.event_id)? {
            return Err(AgendaError::EventNotFound {
                id: batch.event_id.clone(),
            });
        }

        let now_str = Timestamp::now().to_string();

        for record in &batch.items {
            tx.execute(
                UPSERT_ITEM_SQL,
                params![
                    &record.item_id,
                    &batch.event_id,
                    &record.topic,
                    &record.notes,
                    record.duration_min as i64,
                    record.day as i64,
                    record.position as i64,
                    &record.begins_at,
                    &record.ends_at,
                    record.filler.unwrap_or(false),
                    record.created_at.to_string(),
                    &now_str
                ],
            )
            .map_err(|e| AgendaError::database_error("Failed to upsert item", e))?;
        }

        // Read the stored rows back; these, not the input, are what callers
        // treat as authoritative.
        let mut stored = Vec::with_capacity(batch.items.len());
        for record in &batch.items {
            let row = tx
                .query_row(
                    SELECT_ITEM_SQL,
                    params![&record.item_id],
                    Self::build_record_from_row,
                )
                .map_err(|e| AgendaError::database_error("Failed to read back upserted item", e))?;
            stored.push(row);
        }

        tx.execute(
            UPDATE_EVENT_TIMESTAMP_SQL,
            params![&now_str, &batch.event_id],
        )
        .map_err(|e| AgendaError::database_error("Failed to update event timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(stored)
    }

    /// Retrieves all items for a given event.
    ///
    /// Rows come back keyed by id, deliberately not in display order;
    /// callers re-group per day on every load.
    pub fn list_items(&self, event_id: &str) -> Result<Vec<ItemRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITEMS_BY_EVENT_SQL)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        let items = stmt
            .query_map(params![event_id], Self::build_record_from_row)
            .map_err(|e| AgendaError::database_error("Failed to query items", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| AgendaError::database_error("Failed to fetch items", e))?;

        Ok(items)
    }

    /// Deletes one item row; re-indexing the surviving day is the engine's
    /// job, persisted by the next batch.
    pub fn delete_item(&mut self, event_id: &str, item_id: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_ITEM_SQL, params![event_id, item_id])
            .map_err(|e| AgendaError::database_error("Failed to delete item", e))?;

        if deleted > 0 {
            let now_str = Timestamp::now().to_string();
            self.connection
                .execute(UPDATE_EVENT_TIMESTAMP_SQL, params![&now_str, event_id])
                .map_err(|e| AgendaError::database_error("Failed to update event timestamp", e))?;
        }

        Ok(deleted > 0)
    }
}
