//! Display implementations for domain models.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::{AgendaItem, Event};

/// Formats a timestamp in the system timezone as `YYYY-MM-DD HH:MM:SS TZ`.
fn local(ts: &Timestamp) -> String {
    ts.to_zoned(TimeZone::system())
        .strftime("%Y-%m-%d %H:%M:%S %Z")
        .to_string()
}

impl fmt::Display for AgendaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filler = if self.is_filler { " *(filler)*" } else { "" };
        writeln!(
            f,
            "- **{}–{}** {} ({} min){filler}",
            self.start_time, self.end_time, self.topic, self.duration_minutes
        )?;
        if !self.description.is_empty() {
            writeln!(f, "  {}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Days: {}", self.day_count)?;
        if !self.day_starts.is_empty() {
            let starts: Vec<String> = self.day_starts.iter().map(ToString::to_string).collect();
            writeln!(f, "- Day starts: {}", starts.join(", "))?;
        }
        writeln!(f, "- Created: {}", local(&self.created_at))?;
        writeln!(f, "- Updated: {}", local(&self.updated_at))?;
        writeln!(f)?;
        Ok(())
    }
}
