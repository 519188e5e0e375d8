//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to render config (TOML). Defaults to ./rewind.toml when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print frames as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply intents in order and print the final frame
    Replay {
        /// Intents such as "move 4", "jump 2", "toggle"
        #[arg(required = true)]
        intents: Vec<String>,

        /// Print a frame after every intent, not only the last
        #[arg(long)]
        each: bool,
    },

    /// Read one intent per line from stdin, printing a frame after each
    Play,
}
