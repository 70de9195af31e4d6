//! Command-line interface for quarto.

use clap::{Parser, Subcommand};

/// Quarto - give-then-place rules engine with a console front end
#[derive(Parser, Debug)]
#[command(name = "quarto")]
#[command(about = "Play Quarto in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on stdin/stdout
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Print a JSON snapshot after every command
        #[arg(long)]
        json: bool,
    },

    /// List the 16 pieces and their codes
    Pieces,

    /// List the 10 scoring lines
    Lines,
}
