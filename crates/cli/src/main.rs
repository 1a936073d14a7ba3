//! Tollgate CLI - toll rates and peak premiums from the command line
//!
//! Usage:
//! ```bash
//! tollgate rate car
//! tollgate premium --at 2026-10-21T08:15 --inbound
//! tollgate quote taxi --at 2026-10-21T17:30
//! tollgate table
//! tollgate demo
//! tollgate --format json quote bus --at 2026-10-24T09:00
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

use commands::{demo, rates};

/// Tollgate - toll decision tables for a road pricing scheme
#[derive(Parser)]
#[command(name = "tollgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Flat toll rate for a vehicle type
    Rate {
        /// Vehicle type (car, taxi, bus, delivery_truck)
        vehicle: Option<String>,
    },

    /// Peak-time premium for a crossing
    Premium {
        /// Time of crossing (YYYY-MM-DDTHH:MM[:SS]), defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Crossing is heading into the city
        #[arg(long)]
        inbound: bool,
    },

    /// Full toll quote: flat rate times peak premium
    Quote {
        /// Vehicle type (car, taxi, bus, delivery_truck)
        vehicle: String,
        /// Time of crossing (YYYY-MM-DDTHH:MM[:SS]), defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Crossing is heading into the city
        #[arg(long)]
        inbound: bool,
    },

    /// Print the full peak premium table
    Table,

    /// Walk through the sample vehicles and both failure paths
    Demo,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rate { vehicle } => {
            rates::rate(vehicle.as_deref(), cli.format)?;
        }

        Commands::Premium { at, inbound } => {
            rates::premium(at.as_deref(), inbound, cli.format)?;
        }

        Commands::Quote {
            vehicle,
            at,
            inbound,
        } => {
            rates::quote(&vehicle, at.as_deref(), inbound, cli.format)?;
        }

        Commands::Table => {
            rates::table(cli.format)?;
        }

        Commands::Demo => {
            demo::run(cli.format)?;
        }
    }

    Ok(())
}
