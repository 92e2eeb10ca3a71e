//! Core library for the Agenda event-scheduling application.
//!
//! This crate implements the scheduling & reordering engine for multi-day
//! event agendas: ordered lists of timed items grouped by day, where every
//! item's start and end time is derived from its position and duration
//! rather than stored independently.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): canonical [`models::AgendaItem`] and the
//!   persisted [`models::ItemRecord`] shape, with total two-way converters
//! - **Schedule engine** ([`schedule`]): day grouping, contiguous time
//!   recalculation, and pure reorder transforms over an immutable
//!   [`schedule::EventSchedule`] value
//! - **Reconciler** ([`reconcile`]): validates and persists whole
//!   recomputed item sets as single batches, keeping the previous confirmed
//!   state intact until the store acknowledges
//! - **Store** ([`store`]): the narrow [`store::ItemStore`] persistence
//!   boundary and its SQLite implementation
//! - **Facade** ([`agenda`]): the high-level async API interface layers use
//!
//! # Quick Start
//!
//! ```rust
//! use agenda_core::{AgendaBuilder, params::CreateEvent};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a facade instance
//! let agenda = AgendaBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Create a two-day event starting at 09:00
//! let event = agenda
//!     .create_event(&CreateEvent {
//!         name: "Planning week".to_string(),
//!         day_count: 2,
//!         day_starts: vec!["09:00".parse()?],
//!     })
//!     .await?;
//!
//! // Print the (still empty) timetable
//! let schedule = agenda.load_schedule(&event.id).await?;
//! println!("{}", agenda_core::display::Timetable(schedule));
//! # Ok(())
//! # }
//! ```

pub mod agenda;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod reconcile;
pub mod schedule;
pub mod store;

// Re-export commonly used types
pub use agenda::{Agenda, AgendaBuilder};
pub use display::{Events, Timetable};
pub use error::{AgendaError, Result};
pub use models::{AgendaItem, Event, ItemRecord};
pub use params::{CreateEvent, CreateItem, MoveIntent, NudgeDirection, UpdateItem};
pub use reconcile::{ItemBatch, Reconciler};
pub use schedule::time::ClockTime;
pub use schedule::EventSchedule;
pub use store::{ItemStore, SqliteStore};
