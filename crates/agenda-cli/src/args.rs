use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{EventCommands, ItemCommands, ShowArgs};

/// Main command-line interface for the Agenda scheduling tool
///
/// Agenda manages multi-day event timetables. Each event holds ordered,
/// timed items grouped by day; start and end times are derived from item
/// order and duration, so moving or resizing one item automatically
/// reflows the rest of its day.
#[derive(Parser)]
#[command(version, about, name = "ag")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/agenda/agenda.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Agenda CLI
///
/// The CLI is organized into three main command categories:
/// - `event`: Operations for managing events (create, list, show, delete)
/// - `item`: Operations for the agenda items within an event
/// - `show`: Render one event's full per-day timetable
#[derive(Subcommand)]
pub enum Commands {
    /// Manage events
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// Manage agenda items within events
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Show an event's timetable
    #[command(alias = "s")]
    Show(ShowArgs),
}
