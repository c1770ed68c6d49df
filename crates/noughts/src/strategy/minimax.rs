//! Full game-tree search with alpha-beta pruning.

use super::Strategy;
use crate::rules::{is_full, is_terminal, winner};
use crate::{Board, MoveError, Player, Position};
use tracing::{debug, instrument};

/// Score of a win found at the root; each ply deeper costs one point so
/// faster wins and slower losses are preferred.
const WIN: i32 = 10;

/// Perfect play by exhaustive minimax search.
///
/// Ties go to the first best action in row-major order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Minimax;

impl Minimax {
    /// Scores `board` from `root`'s point of view, `depth` plies below the
    /// position being decided.
    fn score(
        board: &Board,
        root: Player,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, MoveError> {
        if let Some(w) = winner(board) {
            return Ok(if w == root { WIN - depth } else { depth - WIN });
        }
        if is_full(board) {
            return Ok(0);
        }

        let to_move = board.current_player();
        let maximizing = to_move == root;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for action in Position::ALL.into_iter().filter(|&p| board.is_empty(p)) {
            let child = board.apply(action, to_move)?;
            let value = Self::score(&child, root, depth + 1, alpha, beta)?;
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}

impl Strategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    #[instrument(skip(self, board))]
    fn select(&self, board: &Board) -> Result<Position, MoveError> {
        if is_terminal(board) {
            return Err(MoveError::NoLegalMove);
        }

        let root = board.current_player();
        let mut best: Option<(Position, i32)> = None;

        for action in board.available_actions() {
            let child = board.apply(action, root)?;
            let value = Self::score(&child, root, 1, i32::MIN / 2, i32::MAX / 2)?;
            if best.is_none_or(|(_, score)| value > score) {
                best = Some((action, value));
            }
        }

        let (position, value) = best.ok_or(MoveError::NoLegalMove)?;
        debug!(?root, %position, value, "Minimax decision");
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_answers_corner_with_center() {
        assert_eq!(Minimax.select(&board("X../.../...")), Ok(Position::CENTER));
    }

    #[test]
    fn test_winning_move_is_chosen() {
        assert_eq!(Minimax.select(&board("XX./.O./..O")), Ok(Position::TOP_RIGHT));
    }

    #[test]
    fn test_blocks_vertical_threat() {
        assert_eq!(Minimax.select(&board("X../X../.O.")), Ok(Position::BOTTOM_LEFT));
    }

    #[test]
    fn test_prevents_fork() {
        // X holds opposite corners and O the center: O must take an edge,
        // a corner reply lets X fork.
        let choice = Minimax.select(&board("X../.O./..X")).unwrap();
        assert!(
            [
                Position::TOP_CENTER,
                Position::MIDDLE_LEFT,
                Position::MIDDLE_RIGHT,
                Position::BOTTOM_CENTER
            ]
            .contains(&choice)
        );
    }
}
