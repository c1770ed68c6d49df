//! Tic-tac-toe rules and move selection.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Position`] and [`Player`]. Boards are
//!   values; applying a move returns a new board.
//! - **Rules**: [`winner`], [`utility`], [`is_terminal`] and friends,
//!   pure functions over a board.
//! - **Strategies**: [`OnePly`] picks a winning square, else a blocking
//!   square, else any square. [`Minimax`] plays perfectly.
//! - **Sessions**: [`GameInProgress`] and [`GameFinished`] track history
//!   for a front end driving a game.
//!
//! # Example
//!
//! ```
//! use noughts::{Board, OnePly, Position, Strategy};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(OnePly.select(&board)?, Position::TOP_RIGHT);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::Move;
pub use error::{BoardError, MoveError};
pub use game::{GameFinished, GameInProgress, GameResult};
pub use position::{Action, Position};
pub use rules::{is_draw, is_full, is_terminal, outcome, status, utility, winner};
pub use strategy::{
    Buckets, Decision, FirstAvailable, Minimax, OnePly, Priority, Strategy, StrategyKind,
};
pub use types::{Board, GameStatus, Outcome, Player, Square};
