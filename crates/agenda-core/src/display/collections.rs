//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::Event;
use crate::schedule::EventSchedule;

/// Newtype wrapper for displaying a collection of events.
///
/// Handles empty collections gracefully; each event formats through its own
/// Display implementation.
pub struct Events(pub Vec<Event>);

impl Events {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of events in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No events found.")
        } else {
            for event in &self.0 {
                write!(f, "{event}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper rendering a schedule as a per-day markdown timetable.
pub struct Timetable(pub EventSchedule);

impl fmt::Display for Timetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No agenda items yet.");
        }

        for (day, items) in self.0.days() {
            writeln!(f, "## Day {} (starts {})", day + 1, self.0.day_start(day))?;
            writeln!(f)?;
            for item in items {
                write!(f, "{item}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
