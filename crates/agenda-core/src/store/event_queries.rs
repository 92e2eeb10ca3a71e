//! Event CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::error::{AgendaError, DatabaseResultExt, Result};
use crate::models::Event;
use crate::schedule::time::ClockTime;

const INSERT_EVENT_SQL: &str = "INSERT INTO events (event_id, name, day_count, day_starts, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_EVENT_SQL: &str =
    "SELECT event_id, name, day_count, day_starts, created_at, updated_at FROM events WHERE event_id = ?1";
const SELECT_EVENTS_SQL: &str =
    "SELECT event_id, name, day_count, day_starts, created_at, updated_at FROM events ORDER BY created_at";
const DELETE_EVENT_SQL: &str = "DELETE FROM events WHERE event_id = ?1";

impl super::Database {
    /// Helper function to construct an Event from a database row
    fn build_event_from_row(row: &rusqlite::Row) -> rusqlite::Result<Event> {
        let day_starts_json: String = row.get(3)?;
        let day_starts: Vec<ClockTime> = serde_json::from_str(&day_starts_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

        Ok(Event {
            id: row.get(0)?,
            name: row.get(1)?,
            day_count: row.get::<_, i64>(2)? as u32,
            day_starts,
            created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Creates a new event row.
    pub fn create_event(
        &mut self,
        event_id: &str,
        name: &str,
        day_count: u32,
        day_starts: &[ClockTime],
    ) -> Result<Event> {
        let now = Timestamp::now();
        let now_str = now.to_string();
        let day_starts_json = serde_json::to_string(day_starts)?;

        self.connection
            .execute(
                INSERT_EVENT_SQL,
                params![
                    event_id,
                    name,
                    day_count as i64,
                    &day_starts_json,
                    &now_str,
                    &now_str
                ],
            )
            .map_err(|e| AgendaError::database_error("Failed to insert event", e))?;

        Ok(Event {
            id: event_id.to_string(),
            name: name.to_string(),
            day_count,
            day_starts: day_starts.to_vec(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a single event by its ID.
    pub fn get_event(&self, event_id: &str) -> Result<Option<Event>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_EVENT_SQL)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        let event = stmt
            .query_row(params![event_id], Self::build_event_from_row)
            .optional()
            .map_err(|e| AgendaError::database_error("Failed to get event", e))?;

        Ok(event)
    }

    /// Retrieves all events, oldest first.
    pub fn list_events(&self) -> Result<Vec<Event>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_EVENTS_SQL)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        let events = stmt
            .query_map([], Self::build_event_from_row)
            .map_err(|e| AgendaError::database_error("Failed to query events", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| AgendaError::database_error("Failed to fetch events", e))?;

        Ok(events)
    }

    /// Deletes an event and, via the cascade, all of its items.
    pub fn delete_event(&mut self, event_id: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_EVENT_SQL, params![event_id])
            .map_err(|e| AgendaError::database_error("Failed to delete event", e))?;

        Ok(deleted > 0)
    }

    /// Returns whether an event row exists.
    pub(super) fn event_exists(connection: &rusqlite::Connection, event_id: &str) -> Result<bool> {
        connection
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM events WHERE event_id = ?1)",
                params![event_id],
                |row| row.get(0),
            )
            .db_context("Failed to check event existence")
    }
}
