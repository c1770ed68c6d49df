//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that every board reachable by
//! alternating play satisfies. They are checked when boards are read
//! from outside and can be tested independently.

pub mod balanced_marks;
pub mod single_winner;

pub use balanced_marks::BalancedMarks;
pub use single_winner::SingleWinner;

use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Invariant violations detected");
            Err(violations)
        }
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarks, SingleWinner);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_initial_board() {
        assert!(BoardInvariants::check_all(&Board::initial()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let board = Board::initial()
            .apply_as_current_player(Position::TOP_LEFT)
            .and_then(|b| b.apply_as_current_player(Position::CENTER))
            .and_then(|b| b.apply_as_current_player(Position::TOP_RIGHT))
            .unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Two O lines and no X marks at all
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;
        let board = Board::from_squares([o, o, o, e, e, e, o, o, o]);

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, BalancedMarks::description());

        let x = Square::Occupied(Player::X);
        let board = Board::from_squares([x, x, x, o, o, o, e, e, e]);
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, SingleWinner::description());

        // Both at once: six O marks against three, and both players own a line
        let board = Board::from_squares([o, o, o, x, x, x, o, o, o]);
        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, BalancedMarks::description());
        assert_eq!(violations[1].description, SingleWinner::description());
    }
}
