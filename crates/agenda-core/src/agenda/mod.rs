//! High-level async API for managing events and their agendas.
//!
//! The [`Agenda`] facade is what interface layers (the CLI, a future HTTP
//! layer) consume. Each operation follows the same flow: hydrate an
//! [`crate::schedule::EventSchedule`] from the store, apply a pure schedule
//! transform, and hand the result to the [`crate::reconcile::Reconciler`]
//! for batch persistence. The value returned to the caller is always the
//! store-confirmed state.
//!
//! # Usage
//!
//! ```rust,no_run
//! use agenda_core::{AgendaBuilder, params::{CreateEvent, CreateItem}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agenda = AgendaBuilder::new()
//!     .with_database_path(Some("agenda.db"))
//!     .build()
//!     .await?;
//!
//! let event = agenda
//!     .create_event(&CreateEvent {
//!         name: "Team offsite".to_string(),
//!         day_count: 2,
//!         day_starts: vec!["09:00".parse()?],
//!     })
//!     .await?;
//!
//! let item = agenda
//!     .add_item(&CreateItem {
//!         event_id: event.id.clone(),
//!         topic: "Kickoff".to_string(),
//!         description: None,
//!         duration_minutes: 30,
//!         day_index: 0,
//!         is_filler: false,
//!     })
//!     .await?;
//! println!("{} runs {}-{}", item.topic, item.start_time, item.end_time);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use jiff::Timestamp;

pub mod builder;
pub mod event_ops;
pub mod item_ops;

pub use builder::AgendaBuilder;

/// Main facade for managing events and agenda items.
pub struct Agenda {
    pub(crate) db_path: PathBuf,
}

impl Agenda {
    /// Creates a new facade over the given database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

/// Mints an opaque identifier. Uniqueness relies on nanosecond timestamps,
/// which is sufficient for the single-editor model.
pub(crate) fn mint_id(prefix: &str) -> String {
    format!("{prefix}-{:x}", Timestamp::now().as_nanosecond())
}
