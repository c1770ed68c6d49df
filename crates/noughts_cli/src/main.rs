//! Noughts - terminal front end for the tic-tac-toe move selector.

#![warn(missing_docs)]

mod cli;
mod config;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::EngineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    let stdout = std::io::stdout();
    match cli.command {
        Command::Suggest { board } => {
            let config = config.with_overrides(cli.strategy, None);
            session::suggest(&board, &config, stdout.lock())?;
        }
        Command::Play { engine_plays } => {
            let config = config.with_overrides(cli.strategy, engine_plays);
            info!(strategy = %config.strategy(), "Starting game");
            session::play(&config, std::io::stdin().lock(), stdout.lock())?;
        }
        Command::Selfplay { opponent } => {
            let config = config.with_overrides(cli.strategy, None);
            let x = config.strategy().build();
            let o = opponent.unwrap_or(*config.strategy()).build();
            session::selfplay(x.as_ref(), o.as_ref(), stdout.lock())?;
        }
    }

    Ok(())
}
