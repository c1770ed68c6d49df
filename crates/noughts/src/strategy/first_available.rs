//! Baseline strategy that takes the first empty square.

use super::Strategy;
use crate::rules::is_terminal;
use crate::{Board, MoveError, Position};
use tracing::instrument;

/// Picks the first empty square in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailable;

impl Strategy for FirstAvailable {
    fn name(&self) -> &'static str {
        "first_available"
    }

    #[instrument(skip(self, board))]
    fn select(&self, board: &Board) -> Result<Position, MoveError> {
        if is_terminal(board) {
            return Err(MoveError::NoLegalMove);
        }
        Position::ALL
            .iter()
            .copied()
            .find(|&pos| board.is_empty(pos))
            .ok_or(MoveError::NoLegalMove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_first_empty() {
        let board: Board = "XO./.../...".parse().unwrap();
        assert_eq!(FirstAvailable.select(&board), Ok(Position::TOP_RIGHT));
    }
}
