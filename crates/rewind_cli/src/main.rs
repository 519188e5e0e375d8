//! Rewind - tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_cli::{Format, RenderConfig, Session};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    let config = RenderConfig::load(cli.config.as_deref()).context("Failed to load render config")?;
    let format = if cli.json { Format::Json } else { Format::Text };
    let mut session = Session::new(config, format);

    match cli.command {
        Command::Replay { intents, each } => {
            info!(count = intents.len(), "Replaying intents");
            session.replay(&intents, each, &mut io::stdout().lock())
        }
        Command::Play => {
            info!("Starting interactive session");
            session.run(io::stdin().lock(), &mut io::stdout().lock())
        }
    }
}
