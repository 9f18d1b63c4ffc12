//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::{Budget, DEFAULT_DAYS, Destination, Priority};

/// GreenPath Nepal - travel Nepal beautifully, leave it even more beautiful
#[derive(Debug, Parser)]
#[command(
    name = "greenpath",
    about = "Eco-friendly Nepal itinerary planner",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate an eco itinerary
    Plan(PlanArgs),

    /// List the destinations, budgets and priorities that can be chosen
    Options,

    /// Serve the JSON API
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Debug, clap::Args)]
pub struct PlanArgs {
    /// Where do you want to go?
    #[arg(short, long, default_value_t = Destination::KathmanduValley)]
    pub destination: Destination,

    /// How many days? (1-10)
    #[arg(short = 'n', long, default_value_t = DEFAULT_DAYS)]
    pub days: u32,

    /// Budget level
    #[arg(short, long, default_value_t = Budget::Low)]
    pub budget: Budget,

    /// What do you love most? (repeatable)
    #[arg(short, long = "priority", default_values_t = [Priority::NatureTrekking])]
    pub priorities: Vec<Priority>,

    /// Directory for the text export (defaults to the configured directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Do not write the text export
    #[arg(long)]
    pub no_export: bool,

    /// Never ask for an API key interactively
    #[arg(long)]
    pub no_prompt: bool,
}
