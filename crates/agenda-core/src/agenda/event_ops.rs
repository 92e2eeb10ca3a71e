//! Event operations for the Agenda facade.

use tokio::task;

use super::{mint_id, Agenda};
use crate::error::{AgendaError, Result};
use crate::models::Event;
use crate::params::CreateEvent;
use crate::store::Database;

impl Agenda {
    /// Creates a new event with the given name, day count, and optional
    /// per-day start times.
    pub async fn create_event(&self, params: &CreateEvent) -> Result<Event> {
        params.validate()?;

        let db_path = self.db_path.clone();
        let event_id = mint_id("evt");
        let name = params.name.clone();
        let day_count = params.day_count;
        let day_starts = params.day_starts.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_event(&event_id, &name, day_count, &day_starts)
        })
        .await
        .map_err(Self::join_err)?
    }

    /// Retrieves a single event by its ID.
    pub async fn get_event(&self, event_id: &str) -> Result<Option<Event>> {
        let db_path = self.db_path.clone();
        let event_id = event_id.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_event(&event_id)
        })
        .await
        .map_err(Self::join_err)?
    }

    /// Retrieves all events.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_events()
        })
        .await
        .map_err(Self::join_err)?
    }

    /// Deletes an event and all of its items.
    pub async fn delete_event(&self, event_id: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = event_id.to_string();

        let deleted = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_event(&id)
        })
        .await
        .map_err(Self::join_err)??;

        if deleted {
            Ok(())
        } else {
            Err(AgendaError::EventNotFound {
                id: event_id.to_string(),
            })
        }
    }

    pub(crate) fn join_err(e: task::JoinError) -> AgendaError {
        AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        }
    }
}
