//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::events::EventsArgs;
use super::commands::init::InitArgs;
use super::commands::shifts::ShiftsArgs;

#[derive(Parser, Debug)]
#[command(name = "turnos")]
#[command(about = "Turnos - resolve recurring work shifts onto calendar dates", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (replaces the .turnos/ layering)
    #[arg(short, long, global = true, env = "TURNOS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default .turnos/config.yaml
    Init(InitArgs),

    /// Show which shift applies to each day of a range
    Shifts(ShiftsArgs),

    /// Days and hours per shift over a range
    Summary(ShiftsArgs),

    /// Calendar events visible to a user
    Events(EventsArgs),

    /// Print the effective configuration
    Config,
}
