//! Balanced marks invariant: X leads O by zero or one mark.

use super::Invariant;
use crate::{Board, Player};

/// Invariant: X moves first and players alternate.
///
/// The number of X marks minus the number of O marks is 0 or 1.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_board_holds() {
        assert!(BalancedMarks::holds(&Board::initial()));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let mut board = Board::initial();
        for pos in Position::ALL {
            board = board.apply_as_current_player(pos).unwrap();
            assert!(BalancedMarks::holds(&board));
        }
    }

    #[test]
    fn test_o_first_violates() {
        let board = Board::initial().apply(Position::CENTER, Player::O).unwrap();
        assert!(!BalancedMarks::holds(&board));
    }

    #[test]
    fn test_x_twice_violates() {
        let board = Board::initial()
            .apply(Position::CENTER, Player::X)
            .and_then(|b| b.apply(Position::TOP_LEFT, Player::X))
            .unwrap();
        assert!(!BalancedMarks::holds(&board));
    }
}
