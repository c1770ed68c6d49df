//! Terminal-state detection.

use super::draw::is_full;
use super::win::winner;
use crate::{Board, GameStatus};
use tracing::instrument;

/// True when no further move should be made: the board is full or a
/// line is complete.
///
/// A draw and a win both report `true`; use [`winner`] or [`status`] to
/// tell them apart.
#[instrument(skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    board.empty_count() == 0 || winner(board).is_some()
}

/// Classifies the board as in progress, won or drawn.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
