//! Persistence collaborators for the agenda engine.
//!
//! The engine itself only computes in-memory values; everything it needs
//! from storage goes through the narrow [`ItemStore`] boundary. The shipped
//! implementation, [`SqliteStore`], keeps SQLite state on disk and runs each
//! blocking rusqlite call under `tokio::task::spawn_blocking`, opening a
//! fresh [`Database`] connection per call.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tokio::task;

use crate::error::{AgendaError, DatabaseResultExt, Result};
use crate::models::ItemRecord;
use crate::reconcile::ItemBatch;

pub mod event_queries;
pub mod item_queries;
pub mod schema;

/// Persistence boundary consumed by the reconciler and the facade.
///
/// Implementations must make `upsert_items` idempotent per `item_id` and
/// atomic per batch; the rows they return are authoritative and carry no
/// ordering guarantee, so callers re-group on every load.
pub trait ItemStore {
    /// Persists a validated batch, returning the stored representation of
    /// every item in it.
    fn upsert_items(
        &self,
        batch: ItemBatch,
    ) -> impl std::future::Future<Output = Result<Vec<ItemRecord>>> + Send;

    /// Fetches every item of an event, in unspecified order.
    fn list_items(
        &self,
        event_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ItemRecord>>> + Send;

    /// Deletes one item; `Ok(false)` means it was already gone.
    fn delete_item(
        &self,
        event_id: &str,
        item_id: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// SQLite-backed [`ItemStore`].
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Creates a store over the given database file.
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    fn join_err(e: task::JoinError) -> AgendaError {
        AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        }
    }
}

impl ItemStore for SqliteStore {
    async fn upsert_items(&self, batch: ItemBatch) -> Result<Vec<ItemRecord>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.upsert_items(&batch)
        })
        .await
        .map_err(Self::join_err)?
    }

    async fn list_items(&self, event_id: &str) -> Result<Vec<ItemRecord>> {
        let db_path = self.db_path.clone();
        let event_id = event_id.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_items(&event_id)
        })
        .await
        .map_err(Self::join_err)?
    }

    async fn delete_item(&self, event_id: &str, item_id: &str) -> Result<bool> {
        let db_path = self.db_path.clone();
        let event_id = event_id.to_string();
        let item_id = item_id.to_string();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_item(&event_id, &item_id)
        })
        .await
        .map_err(Self::join_err)?
    }
}
