//! Strictly Connect - Unified CLI
//!
//! Drives the connect-N engine from command scripts.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Read;
use std::path::{Path, PathBuf};
use strictly_connect::{GameConfig, GameService, ScriptRunner, SequentialIds};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    initialize_tracing(&config)?;

    match cli.command {
        Command::Run {
            script,
            sequential_ids,
        } => run_script(config, script, sequential_ids),
        Command::Config => print_config(&config),
    }
}

/// Load the config file, or fall back to defaults
fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => Ok(GameConfig::from_file(path)?),
        None => Ok(GameConfig::default()),
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured filter.
fn initialize_tracing(config: &GameConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match config.log_path() {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("unable to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

/// Run a command script, printing one response per command
#[instrument(skip(config))]
fn run_script(config: GameConfig, script: Option<PathBuf>, sequential_ids: bool) -> Result<()> {
    let text = match &script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("unable to read script {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("unable to read script from stdin")?;
            text
        }
    };

    let service = if sequential_ids {
        GameService::new(config, SequentialIds::new("game"))
    } else {
        GameService::with_uuids(config)
    };

    info!("Running script");
    let mut runner = ScriptRunner::new(service);
    let mut failures = 0;
    for result in runner.run_script(&text) {
        match result {
            Ok(output) => println!("{}", output),
            Err(e) => {
                failures += 1;
                warn!(error = %e, "Command failed");
                println!("error: {}", e);
            }
        }
    }

    info!(
        games = runner.service().registry().len(),
        failures, "Script finished"
    );
    Ok(())
}

/// Print the effective configuration
fn print_config(config: &GameConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
