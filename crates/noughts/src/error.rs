//! Error types for board construction and move application.

use crate::position::Position;
use crate::types::Player;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates lie outside the 3x3 grid.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board is terminal, so there is no move to choose.
    #[display("No legal move: the game is over")]
    NoLegalMove,

    /// It's not this player's turn.
    #[display("It's not {:?}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}

/// Error that can occur when reading a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A character that is neither a mark nor an empty-cell marker.
    #[display("Unexpected cell character {:?}", _0)]
    InvalidCell(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),

    /// The cells cannot arise from alternating play.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for BoardError {}
