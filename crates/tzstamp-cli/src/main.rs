//! tzstamp CLI Application
//!
//! Command-line front end for formatting console timestamps and managing the
//! operator's display zone.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, ZoneCommands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tzstamp_core::ZonePreferenceBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let preference = ZonePreferenceBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open preference database")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("tzs started");

    let mut cli = Cli::new(preference, renderer);
    match command {
        Some(Format(args)) => cli.format_instants(args),
        Some(Zone { command }) => cli.handle_zone_command(command),
        Some(Access(args)) => cli.check_access(args),
        None => cli.handle_zone_command(ZoneCommands::Show),
    }
}
