//! Phase-specific game sessions.
//!
//! A game is either [`GameInProgress`] or [`GameFinished`]. Only a game
//! in progress accepts moves, and a finished game always carries its
//! final status.

use crate::rules::status;
use crate::strategy::Strategy;
use crate::{Board, GameStatus, Move, MoveError, Player, Position};
use tracing::{debug, instrument};

/// Game in progress - can accept moves.
#[derive(Debug, Clone, Default)]
pub struct GameInProgress {
    board: Board,
    history: Vec<Move>,
}

impl GameInProgress {
    /// Creates a new game on the initial board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.board.current_player()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty squares in row-major order.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.available_actions()
    }

    /// Places the current player's mark at `position`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the square is taken.
    #[instrument(skip(self))]
    pub fn play(self, position: Position) -> Result<GameResult, MoveError> {
        let action = Move::new(self.to_move(), position);
        self.make_move(action)
    }

    /// Applies `action`, consuming self and transitioning to the next state.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::WrongPlayer` if it is not `action.player`'s turn
    /// and `MoveError::SquareOccupied` if the square is taken.
    #[instrument(skip(self))]
    pub fn make_move(mut self, action: Move) -> Result<GameResult, MoveError> {
        if action.player != self.to_move() {
            return Err(MoveError::WrongPlayer(action.player));
        }

        self.board = self.board.apply(action.position, action.player)?;
        self.history.push(action);

        match status(&self.board) {
            GameStatus::InProgress => Ok(GameResult::InProgress(self)),
            finished => {
                debug!(status = %finished, moves = self.history.len(), "Game finished");
                Ok(GameResult::Finished(GameFinished {
                    board: self.board,
                    history: self.history,
                    status: finished,
                }))
            }
        }
    }

    /// Lets `strategy` choose the move for the player to move.
    ///
    /// # Errors
    ///
    /// Propagates errors from the strategy.
    #[instrument(skip(self, strategy), fields(strategy = strategy.name()))]
    pub fn engine_move(self, strategy: &dyn Strategy) -> Result<GameResult, MoveError> {
        let position = strategy.select(&self.board)?;
        self.play(position)
    }

    /// Replays positions from the initial board, alternating players.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::NoLegalMove` if positions remain after the game
    /// has finished, or any error from [`GameInProgress::play`].
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<GameResult, MoveError> {
        let mut game = GameInProgress::new();

        for (i, position) in positions.iter().enumerate() {
            match game.play(*position)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) if i + 1 == positions.len() => {
                    return Ok(GameResult::Finished(g));
                }
                GameResult::Finished(_) => return Err(MoveError::NoLegalMove),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

/// Game finished - status determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    status: GameStatus,
}

impl GameFinished {
    /// Returns the final status, `Won` or `Draw`.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Starts over on an empty board.
    pub fn restart(self) -> GameInProgress {
        GameInProgress::new()
    }
}

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::OnePly;

    #[test]
    fn test_alternating_players() {
        let game = GameInProgress::new();
        assert_eq!(game.to_move(), Player::X);

        let GameResult::InProgress(game) = game.play(Position::CENTER).unwrap() else {
            panic!("Game shouldn't end after first move");
        };
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[Move::new(Player::X, Position::CENTER)]);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let game = GameInProgress::new();
        let result = game.make_move(Move::new(Player::O, Position::CENTER));
        assert!(matches!(result, Err(MoveError::WrongPlayer(Player::O))));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let result = GameInProgress::replay(&[Position::CENTER, Position::CENTER]);
        assert!(matches!(
            result,
            Err(MoveError::SquareOccupied(Position::CENTER))
        ));
    }

    #[test]
    fn test_win_detection() {
        let result = GameInProgress::replay(&[
            Position::TOP_LEFT,
            Position::CENTER,
            Position::TOP_CENTER,
            Position::BOTTOM_LEFT,
            Position::TOP_RIGHT,
        ])
        .unwrap();

        let GameResult::Finished(game) = result else {
            panic!("Game should be finished");
        };
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.winner(), Some(Player::X));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_moves_after_finish_rejected() {
        let result = GameInProgress::replay(&[
            Position::TOP_LEFT,
            Position::CENTER,
            Position::TOP_CENTER,
            Position::BOTTOM_LEFT,
            Position::TOP_RIGHT,
            Position::BOTTOM_RIGHT,
        ]);
        assert!(matches!(result, Err(MoveError::NoLegalMove)));
    }

    #[test]
    fn test_engine_move_completes_line() {
        let GameResult::InProgress(game) = GameInProgress::replay(&[
            Position::TOP_LEFT,
            Position::MIDDLE_LEFT,
            Position::TOP_CENTER,
            Position::CENTER,
        ])
        .unwrap() else {
            panic!("Expected in-progress game");
        };

        let GameResult::Finished(game) = game.engine_move(&OnePly).unwrap() else {
            panic!("X should win at top-right");
        };
        assert_eq!(game.winner(), Some(Player::X));

        let fresh = game.restart();
        assert!(fresh.history().is_empty());
    }
}
