//! Command-line interface definitions using clap
//!
//! This module defines the CLI argument structures with clap's derive API
//! and the handler that maps parsed commands onto the core facade. CLI
//! argument types wrap the interface-neutral core parameter structures;
//! each wrapper converts explicitly via `From`, keeping clap-specific
//! attributes out of the core crate.

use agenda_core::{
    params::{CreateEvent, CreateItem, MoveIntent, NudgeDirection, UpdateItem},
    Agenda, ClockTime, Events, Timetable,
};
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use crate::renderer::TerminalRenderer;

/// Command handler wiring parsed arguments to the core facade.
pub struct Cli {
    agenda: Agenda,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(agenda: Agenda, renderer: TerminalRenderer) -> Self {
        Self { agenda, renderer }
    }

    pub async fn handle_event_command(self, command: EventCommands) -> Result<()> {
        match command {
            EventCommands::Create(args) => self.create_event(args).await,
            EventCommands::List => self.list_events().await,
            EventCommands::Show(args) => self.show_event(args).await,
            EventCommands::Delete(args) => self.delete_event(args).await,
        }
    }

    pub async fn handle_item_command(self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => self.add_item(args).await,
            ItemCommands::Update(args) => self.update_item(args).await,
            ItemCommands::Move(args) => self.move_item(args).await,
            ItemCommands::Nudge(args) => self.nudge_item(args).await,
            ItemCommands::Delete(args) => self.delete_item(args).await,
        }
    }

    async fn create_event(&self, args: CreateEventArgs) -> Result<()> {
        let event = self.agenda.create_event(&args.into()).await?;
        self.renderer.render("# Event Created\n")?;
        self.renderer.render(&event.to_string())
    }

    pub async fn list_events(&self) -> Result<()> {
        let events = Events(self.agenda.list_events().await?);
        if !events.is_empty() {
            self.renderer.render("# Events\n\n")?;
        }
        self.renderer.render(&events.to_string())
    }

    async fn show_event(&self, args: ShowArgs) -> Result<()> {
        let event = self
            .agenda
            .get_event(&args.event_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Event '{}' not found", args.event_id))?;
        self.renderer.render(&event.to_string())?;
        self.show_timetable(&args.event_id).await
    }

    pub async fn show_timetable(&self, event_id: &str) -> Result<()> {
        let schedule = self.agenda.load_schedule(event_id).await?;
        self.renderer.render(&Timetable(schedule).to_string())
    }

    async fn delete_event(&self, args: DeleteEventArgs) -> Result<()> {
        if !args.confirm {
            anyhow::bail!(
                "Deleting an event removes all of its items. Re-run with --confirm to proceed"
            );
        }
        self.agenda.delete_event(&args.event_id).await?;
        self.renderer
            .render(&format!("Deleted event {}\n", args.event_id))
    }

    async fn add_item(&self, args: AddItemArgs) -> Result<()> {
        let item = self.agenda.add_item(&args.into()).await?;
        self.renderer
            .render(&format!("Created item with ID: {}\n\n", item.id))?;
        self.renderer.render(&item.to_string())
    }

    async fn update_item(&self, args: UpdateItemArgs) -> Result<()> {
        let item = self.agenda.update_item(&args.into()).await?;
        self.renderer
            .render(&format!("Updated item {}\n\n", item.id))?;
        self.renderer.render(&item.to_string())
    }

    async fn move_item(&self, args: MoveItemArgs) -> Result<()> {
        let schedule = self.agenda.load_schedule(&args.event_id).await?;
        let (from_day, _) = schedule
            .find_item(&args.item_id)
            .ok_or_else(|| anyhow::anyhow!("Item '{}' not found", args.item_id))?;

        // Same-day moves take the across-days path too; the engine treats
        // them as a plain within-day reorder.
        let intent = MoveIntent::AcrossDays {
            item_id: args.item_id,
            from_day,
            to_day: args.day.unwrap_or(from_day),
            to_index: args.index,
        };
        let schedule = self.agenda.move_item(&args.event_id, &intent).await?;
        self.renderer.render(&Timetable(schedule).to_string())
    }

    async fn nudge_item(&self, args: NudgeItemArgs) -> Result<()> {
        let schedule = self
            .agenda
            .nudge_item(&args.event_id, &args.item_id, args.direction.into())
            .await?;
        self.renderer.render(&Timetable(schedule).to_string())
    }

    async fn delete_item(&self, args: DeleteItemArgs) -> Result<()> {
        let schedule = self
            .agenda
            .delete_item(&args.event_id, &args.item_id)
            .await?;
        self.renderer
            .render(&format!("Deleted item {}\n\n", args.item_id))?;
        self.renderer.render(&Timetable(schedule).to_string())
    }
}

/// Create a new event
#[derive(Args)]
pub struct CreateEventArgs {
    /// Name of the event
    pub name: String,
    /// Number of days the event spans
    #[arg(short, long, default_value_t = 1, help = "Number of days the event spans")]
    pub days: u32,
    /// Start times per day (HH:MM) - comma-separated list
    #[arg(
        short = 's',
        long,
        value_delimiter = ',',
        help = "Start time per day (HH:MM) as comma-separated list; days without an entry start at 00:00"
    )]
    pub day_starts: Vec<ClockTime>,
}

impl From<CreateEventArgs> for CreateEvent {
    fn from(val: CreateEventArgs) -> Self {
        CreateEvent {
            name: val.name,
            day_count: val.days,
            day_starts: val.day_starts,
        }
    }
}

/// Show an event's timetable
#[derive(Args)]
pub struct ShowArgs {
    /// ID of the event to display
    #[arg(help = "Unique identifier of the event to show")]
    pub event_id: String,
}

/// Delete an event permanently
#[derive(Args)]
pub struct DeleteEventArgs {
    /// ID of the event to delete
    #[arg(help = "Unique identifier of the event to permanently delete")]
    pub event_id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Create a new event
    #[command(alias = "c")]
    Create(CreateEventArgs),
    /// List all events
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show an event and its timetable
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Delete an event permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteEventArgs),
}

/// Add a new item to the end of an event day
#[derive(Args)]
pub struct AddItemArgs {
    /// ID of the event to add the item to
    #[arg(help = "Unique identifier of the event to add this item to")]
    pub event_id: String,
    /// Topic of the item
    pub topic: String,
    /// Length of the item in minutes
    #[arg(short = 'm', long, help = "Length of the item in minutes")]
    pub duration: u32,
    /// Day of the event the item belongs to (0 = first day)
    #[arg(long, default_value_t = 0, help = "0-based day of the event the item belongs to")]
    pub day: u32,
    /// Optional free-form description
    #[arg(short, long, help = "Optional free-form description")]
    pub description: Option<String>,
    /// Mark the item as a filler (break, buffer)
    #[arg(long, help = "Mark the item as a filler slot such as a break or buffer")]
    pub filler: bool,
}

impl From<AddItemArgs> for CreateItem {
    fn from(val: AddItemArgs) -> Self {
        CreateItem {
            event_id: val.event_id,
            topic: val.topic,
            description: val.description,
            duration_minutes: val.duration,
            day_index: val.day,
            is_filler: val.filler,
        }
    }
}

/// Update an item's topic, description, or duration
#[derive(Args)]
pub struct UpdateItemArgs {
    #[arg(help = "Unique identifier of the owning event")]
    pub event_id: String,
    #[arg(help = "Unique identifier of the item to update")]
    pub item_id: String,
    #[arg(short, long, help = "Updated topic for the item")]
    pub topic: Option<String>,
    #[arg(short, long, help = "Updated free-form description")]
    pub description: Option<String>,
    #[arg(
        short = 'm',
        long,
        help = "Updated length in minutes; later items in the day reflow"
    )]
    pub duration: Option<u32>,
}

impl From<UpdateItemArgs> for UpdateItem {
    fn from(val: UpdateItemArgs) -> Self {
        UpdateItem {
            event_id: val.event_id,
            item_id: val.item_id,
            topic: val.topic,
            description: val.description,
            duration_minutes: val.duration,
        }
    }
}

/// Move an item to a new position, optionally on another day
#[derive(Args)]
pub struct MoveItemArgs {
    #[arg(help = "Unique identifier of the owning event")]
    pub event_id: String,
    #[arg(help = "Unique identifier of the item to move")]
    pub item_id: String,
    /// Target position within the day (clamped to the day's length)
    #[arg(short, long, help = "0-based target position within the day")]
    pub index: usize,
    /// Target day; defaults to the item's current day
    #[arg(long, help = "0-based target day; defaults to the item's current day")]
    pub day: Option<u32>,
}

/// Move an item one step or to an extreme within its day
#[derive(Args)]
pub struct NudgeItemArgs {
    #[arg(help = "Unique identifier of the owning event")]
    pub event_id: String,
    #[arg(help = "Unique identifier of the item to nudge")]
    pub item_id: String,
    /// Direction to nudge (up, down, top, bottom)
    pub direction: NudgeDirectionArg,
}

/// Delete an item from an event
#[derive(Args)]
pub struct DeleteItemArgs {
    #[arg(help = "Unique identifier of the owning event")]
    pub event_id: String,
    #[arg(help = "Unique identifier of the item to delete")]
    pub item_id: String,
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a new item to an event
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Update an item's topic, description, or duration
    #[command(alias = "u")]
    Update(UpdateItemArgs),
    /// Move an item to a new position, optionally across days
    #[command(alias = "m")]
    Move(MoveItemArgs),
    /// Nudge an item within its day
    #[command(alias = "n")]
    Nudge(NudgeItemArgs),
    /// Delete an item
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteItemArgs),
}

/// Command-line argument representation of nudge directions
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum NudgeDirectionArg {
    /// One position earlier in the day
    Up,
    /// One position later in the day
    Down,
    /// First position of the day
    Top,
    /// Last position of the day
    Bottom,
}

impl From<NudgeDirectionArg> for NudgeDirection {
    fn from(val: NudgeDirectionArg) -> Self {
        match val {
            NudgeDirectionArg::Up => NudgeDirection::Up,
            NudgeDirectionArg::Down => NudgeDirection::Down,
            NudgeDirectionArg::Top => NudgeDirection::Top,
            NudgeDirectionArg::Bottom => NudgeDirection::Bottom,
        }
    }
}
