//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts::{Player, StrategyKind};

/// Noughts - tic-tac-toe move selection from the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Suggest and play tic-tac-toe moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Strategy override: one_ply, minimax or first_available
    #[arg(short, long, global = true)]
    pub strategy: Option<StrategyKind>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine's move for a board
    Suggest {
        /// Board as nine cells of X, O and '.', e.g. "XX./OO./..."
        #[arg(short, long)]
        board: String,
    },

    /// Play against the engine on stdin/stdout
    Play {
        /// Side the engine plays (X moves first)
        #[arg(long)]
        engine_plays: Option<Player>,
    },

    /// Let two engines play each other
    Selfplay {
        /// Strategy for O; X uses the configured strategy
        #[arg(long)]
        opponent: Option<StrategyKind>,
    },
}
