//! One-ply win/block move selection.
//!
//! For every empty square the selector looks at two hypothetical boards:
//! the player to move takes the square, or the opponent takes that same
//! square instead. The square is filed under the utility of both boards.
//! A square that wins now is preferred, then a square the opponent would
//! win on (a block), then any neutral square.
//!
//! This looks exactly one move ahead. It does not see forks or any
//! threat that takes more than one move to build; use
//! [`Minimax`](super::Minimax) for perfect play.

use super::Strategy;
use crate::rules::{is_terminal, utility};
use crate::{Board, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which bucket a decision was drawn from, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// The move completes a line for the player to move.
    Win,
    /// The opponent would complete a line on this square.
    Block,
    /// Neither.
    Neutral,
}

/// A selected move and the bucket it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The chosen square.
    pub position: Position,
    /// Why it was chosen.
    pub priority: Priority,
}

/// Candidate actions grouped by the utility of the boards they lead to.
///
/// An action can sit in two buckets at once. Within a bucket actions
/// keep row-major order and appear once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buckets {
    by_utility: [Vec<Position>; 3],
}

impl Buckets {
    fn slot(utility: i8) -> usize {
        match utility.signum() {
            -1 => 0,
            0 => 1,
            _ => 2,
        }
    }

    /// Files `action` under `utility`.
    pub fn record(&mut self, utility: i8, action: Position) {
        let bucket = &mut self.by_utility[Self::slot(utility)];
        if !bucket.contains(&action) {
            bucket.push(action);
        }
    }

    /// Actions filed under `utility` (-1, 0 or +1).
    pub fn get(&self, utility: i8) -> &[Position] {
        &self.by_utility[Self::slot(utility)]
    }

    /// Evaluates every available action of `board` for the player to move.
    ///
    /// # Errors
    ///
    /// Propagates `MoveError::SquareOccupied` from [`Board::apply`]; this
    /// does not happen for actions taken from `available_actions`.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board) -> Result<Self, MoveError> {
        let me = board.current_player();
        let them = me.opponent();
        let mut buckets = Self::default();

        for action in board.available_actions() {
            let mine = utility(&board.apply(action, me)?);
            let theirs = utility(&board.apply(action, them)?);
            buckets.record(mine, action);
            buckets.record(theirs, action);
        }

        Ok(buckets)
    }

    /// Picks from the highest-priority non-empty bucket for `player`.
    ///
    /// Ties go to the first action in row-major order.
    pub fn choose(&self, player: Player) -> Option<Decision> {
        [
            (player.value(), Priority::Win),
            (player.opponent().value(), Priority::Block),
            (0, Priority::Neutral),
        ]
        .into_iter()
        .find_map(|(value, priority)| {
            self.get(value)
                .first()
                .map(|&position| Decision { position, priority })
        })
    }
}

/// The one-ply win/block heuristic.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnePly;

impl OnePly {
    /// Chooses a move and reports which bucket it came from.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::NoLegalMove` if the board is terminal.
    #[instrument(skip(self, board))]
    pub fn decide(&self, board: &Board) -> Result<Decision, MoveError> {
        if is_terminal(board) {
            return Err(MoveError::NoLegalMove);
        }

        let player = board.current_player();
        let buckets = Buckets::evaluate(board)?;
        let decision = buckets.choose(player).ok_or(MoveError::NoLegalMove)?;

        debug!(
            ?player,
            wins = buckets.get(player.value()).len(),
            blocks = buckets.get(player.opponent().value()).len(),
            position = %decision.position,
            priority = ?decision.priority,
            "One-ply decision"
        );
        Ok(decision)
    }
}

impl Strategy for OnePly {
    fn name(&self) -> &'static str {
        "one_ply"
    }

    fn select(&self, board: &Board) -> Result<Position, MoveError> {
        self.decide(board).map(|d| d.position)
    }
}
