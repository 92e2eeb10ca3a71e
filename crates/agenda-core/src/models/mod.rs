//! Data models for events and agenda items.
//!
//! The canonical in-memory shape is [`AgendaItem`]; the store persists the
//! distinct [`ItemRecord`] shape, and [`record`] holds the total two-way
//! converters between them. Display implementations live in
//! [`crate::display`] to keep data and presentation separate.

pub mod event;
pub mod item;
pub mod record;

#[cfg(test)]
mod tests;

pub use event::Event;
pub use item::AgendaItem;
pub use record::ItemRecord;
