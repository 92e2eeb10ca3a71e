//! Display formatting for events, items, and timetables.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]);
//! newtype wrappers in [`collections`] format whole collections and per-day
//! timetables. All output is markdown, rendered richly by the CLI's
//! terminal renderer.

pub mod collections;
pub mod models;

pub use collections::{Events, Timetable};
