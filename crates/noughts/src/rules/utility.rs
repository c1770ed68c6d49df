//! Numeric value of a board.

use super::win::winner;
use crate::{Board, Player};
use tracing::instrument;

/// +1 if X has a complete line, -1 if O has, 0 otherwise.
///
/// 0 covers both a drawn board and a game still in progress. Callers
/// that need to tell them apart should use
/// [`status`](super::terminal::status).
#[instrument(skip(board))]
pub fn utility(board: &Board) -> i8 {
    winner(board).map_or(0, Player::value)
}
