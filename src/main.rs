//! Quarto - console front end for the rules engine.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use quarto::{Board, Cli, Command, Console, QuartoConfig, write_catalog};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, json } => run_play(config, json),
        Command::Pieces => {
            init_tracing("warn");
            write_catalog(std::io::stdout().lock())
        }
        Command::Lines => {
            init_tracing("warn");
            for line in Board::lines() {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// Installs the subscriber, preferring `RUST_LOG` over the configured filter.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(config_path: Option<std::path::PathBuf>, json: bool) -> Result<()> {
    let config = match &config_path {
        Some(path) => QuartoConfig::from_file(path)?,
        None => QuartoConfig::default(),
    };
    init_tracing(config.log_filter());

    info!(config = ?config_path, "Starting Quarto");
    let json = json || *config.json();
    let mut console = Console::new(config.with_json(json));
    console.run(std::io::stdin().lock(), std::io::stdout().lock())
}
