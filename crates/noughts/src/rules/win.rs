//! Win detection logic for tic-tac-toe.

use crate::{Board, Outcome, Player, Position, Square};
use tracing::instrument;

/// The eight winning triples: rows, then columns, then diagonals.
pub static WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
    ],
    [
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ],
    // Columns
    [
        Position::TOP_LEFT,
        Position::MIDDLE_LEFT,
        Position::BOTTOM_LEFT,
    ],
    [
        Position::TOP_CENTER,
        Position::CENTER,
        Position::BOTTOM_CENTER,
    ],
    [
        Position::TOP_RIGHT,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_RIGHT,
    ],
    // Diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::BOTTOM_LEFT, Position::CENTER, Position::TOP_RIGHT],
];

/// Owners of every complete line, in table order.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = Player> + '_ {
    WINNING_LINES.iter().filter_map(move |&[a, b, c]| {
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c) {
            match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            }
        } else {
            None
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in table order, or
/// `None` if no line is complete.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    completed_lines(board).next()
}

/// The board's [`Outcome`].
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Wins(player),
        None => Outcome::Undecided,
    }
}
