//! Command-line interface for strictly_connect.

use clap::{Parser, Subcommand};

/// Strictly Connect - gravity-drop connect-N game engine
#[derive(Parser, Debug)]
#[command(name = "strictly_connect")]
#[command(about = "In-memory engine for connect-N games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file. Built-in defaults apply when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a command script against a fresh set of games
    Run {
        /// Script file. Reads stdin if not provided.
        script: Option<std::path::PathBuf>,

        /// Name games game-0, game-1, ... instead of random UUIDs
        #[arg(long)]
        sequential_ids: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
