//! Agenda CLI Application
//!
//! Command-line interface for the agenda scheduling tool.

mod args;
mod cli;
mod renderer;

use agenda_core::AgendaBuilder;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let agenda = AgendaBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize agenda")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Agenda started");

    match command {
        Some(Event { command }) => {
            Cli::new(agenda, renderer)
                .handle_event_command(command)
                .await
        }
        Some(Item { command }) => {
            Cli::new(agenda, renderer)
                .handle_item_command(command)
                .await
        }
        Some(Show(show_args)) => {
            Cli::new(agenda, renderer)
                .show_timetable(&show_args.event_id)
                .await
        }
        None => Cli::new(agenda, renderer).list_events().await,
    }
}
