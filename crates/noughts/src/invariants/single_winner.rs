//! Single winner invariant: both players never own a complete line.

use super::Invariant;
use crate::rules::completed_lines;
use crate::{Board, Player};

/// Invariant: at most one player has a complete line.
///
/// Play stops at the first completed line, so a board where X and O both
/// have three in a row cannot be reached.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let mut owners = completed_lines(board);
        match owners.next() {
            Some(first) => owners.all(|p: Player| p == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player has a complete line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_holds() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(SingleWinner::holds(&board));
    }

    #[test]
    fn test_two_lines_same_player_hold() {
        let board: Board = "XXX/OXO/OOX".parse().unwrap();
        assert!(SingleWinner::holds(&board));
    }

    #[test]
    fn test_both_players_violate() {
        let board: Result<Board, _> = "XXX/OOO/...".parse();
        assert!(board.is_err());
    }
}
