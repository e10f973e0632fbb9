//! Attesta CLI — command-line interface for the credential exchange
//! simulator.
//!
//! Subcommands: init, run, did.

mod commands;
mod config;

use clap::{Parser, Subcommand};

/// Attesta — verifiable-credential exchange simulator.
#[derive(Parser, Debug)]
#[command(name = "attesta", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default scenario configuration file.
    Init(commands::init::InitArgs),
    /// Run one issue → present → verify exchange.
    Run(commands::run::RunArgs),
    /// Generate a DID for a display name.
    Did(commands::did::DidArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init(args) => commands::init::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Did(args) => commands::did::run(args),
    }
}
