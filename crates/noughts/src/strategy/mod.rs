//! Move selection strategies.
//!
//! [`OnePly`] is the default selector. [`Minimax`] searches the full
//! game tree and [`FirstAvailable`] is a baseline; both are opt-in.

mod first_available;
mod minimax;
mod one_ply;

pub use first_available::FirstAvailable;
pub use minimax::Minimax;
pub use one_ply::{Buckets, Decision, OnePly, Priority};

use crate::{Board, MoveError, Position};
use serde::{Deserialize, Serialize};

/// Chooses a move for the player to move on a board.
pub trait Strategy: std::fmt::Debug {
    /// Short name for logs and display.
    fn name(&self) -> &'static str;

    /// Returns one of `board.available_actions()`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::NoLegalMove` if the board is terminal.
    fn select(&self, board: &Board) -> Result<Position, MoveError>;
}

/// Names the available strategies for configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StrategyKind {
    /// One-ply win/block heuristic.
    #[default]
    OnePly,
    /// Full game-tree search.
    Minimax,
    /// First empty square in row-major order.
    FirstAvailable,
}

impl StrategyKind {
    /// Instantiates the strategy.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::OnePly => Box::new(OnePly),
            StrategyKind::Minimax => Box::new(Minimax),
            StrategyKind::FirstAvailable => Box::new(FirstAvailable),
        }
    }
}
