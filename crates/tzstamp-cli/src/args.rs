//! Command-line argument definitions using clap.
//!
//! Argument structs stay free of core logic; each converts into the core
//! types it feeds so clap concerns never leak into `tzstamp-core`.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use tzstamp_core::Role;

/// Show console timestamps in the operator's time zone
///
/// tzs converts UTC timestamps into wall-clock time for a chosen IANA zone
/// and manages the saved display zone preference used when no zone is given.
#[derive(Parser)]
#[command(version, about, name = "tzs")]
pub struct Args {
    /// Path to the SQLite preference database. Defaults to
    /// $XDG_DATA_HOME/tzstamp/tzstamp.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the tzs CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Format UTC timestamps in a time zone
    #[command(alias = "f")]
    Format(FormatArgs),
    /// Manage the display zone preference
    #[command(alias = "z")]
    Zone {
        #[command(subcommand)]
        command: ZoneCommands,
    },
    /// Check whether a role may open a view
    Access(AccessArgs),
}

/// Format UTC timestamps in a time zone
///
/// Each instant must carry an explicit offset (`Z` or `+HH:MM`). Instants
/// that cannot be parsed are printed unchanged unless --strict is given.
#[derive(ClapArgs)]
pub struct FormatArgs {
    /// Instants to format, e.g. 2024-01-01T12:00:00Z
    #[arg(required = true)]
    pub instants: Vec<String>,
    /// IANA zone to format in. Defaults to the saved display zone
    #[arg(short, long)]
    pub zone: Option<String>,
    /// Fail on the first unparseable instant instead of echoing it
    #[arg(long)]
    pub strict: bool,
}

/// Set the saved display zone
#[derive(ClapArgs)]
pub struct SetZoneArgs {
    /// IANA zone identifier, e.g. Europe/London
    pub zone: String,
}

/// List selectable zones
#[derive(ClapArgs)]
pub struct ListZonesArgs {
    /// Only show zones containing this text (case-insensitive)
    #[arg(short, long)]
    pub filter: Option<String>,
    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ZoneCommands {
    /// Show the effective display zone and where it came from
    #[command(alias = "s")]
    Show,
    /// Save a display zone
    Set(SetZoneArgs),
    /// Forget the saved display zone
    Clear,
    /// List selectable zones with the active one marked
    #[command(alias = "ls")]
    List(ListZonesArgs),
}

/// Check whether a role may open a view
///
/// Exits with a non-zero status when access is denied.
#[derive(ClapArgs)]
pub struct AccessArgs {
    /// Role the view requires
    pub required: RoleArg,
    /// Role of the operator. Omit for an anonymous operator
    #[arg(short, long)]
    pub role: Option<RoleArg>,
}

/// Command-line representation of operator roles
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum RoleArg {
    /// Administrator
    Admin,
    /// Regular operator
    User,
}

impl From<RoleArg> for Role {
    fn from(val: RoleArg) -> Self {
        match val {
            RoleArg::Admin => Role::Admin,
            RoleArg::User => Role::User,
        }
    }
}
