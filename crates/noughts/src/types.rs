//! Core domain types for tic-tac-toe.

use crate::error::{BoardError, MoveError};
use crate::invariants::{BalancedMarks, BoardInvariants, Invariant, InvariantSet};
use crate::position::{Action, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility of a win for this player: +1 for X, -1 for O.
    pub fn value(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> Option<char> {
        match self {
            Square::Empty => None,
            Square::Occupied(Player::X) => Some('X'),
            Square::Occupied(Player::O) => Some('O'),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is a value: [`Board::apply`] returns a new board and leaves
/// the input board untouched, so hypothetical futures can be explored
/// without cloning by hand.
///
/// Serialized as nine squares in row-major order. Deserialized boards
/// must satisfy the invariants of alternating play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Square; 9]", into = "[Square; 9]")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates the starting board with all nine squares empty.
    pub fn initial() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from raw squares without checking that they could
    /// arise from alternating play.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Returns the player whose turn it is.
    ///
    /// X moves first and players alternate, so O is to move exactly when
    /// X has more marks on the board.
    #[instrument(skip(self))]
    pub fn current_player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Empty squares in row-major order.
    #[instrument(skip(self))]
    pub fn available_actions(&self) -> Vec<Action> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns a new board with `player`'s mark at `action`.
    ///
    /// The mark is placed regardless of whose turn it is, which lets
    /// callers probe hypothetical placements.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn apply(&self, action: Action, player: Player) -> Result<Board, MoveError> {
        if !self.is_empty(action) {
            return Err(MoveError::SquareOccupied(action));
        }
        let mut next = *self;
        next.squares[action.to_index()] = Square::Occupied(player);
        Ok(next)
    }

    /// Returns a new board with the current player's mark at `action`.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::SquareOccupied` if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_as_current_player(&self, action: Action) -> Result<Board, MoveError> {
        let next = self.apply(action, self.current_player())?;
        debug_assert!(
            !BalancedMarks::holds(self) || BalancedMarks::holds(&next),
            "Alternating play produced an inconsistent board"
        );
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// Renders the grid with empty squares shown as their cell number (1-9).
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos].symbol() {
                    Some(c) => write!(f, "{}", c)?,
                    None => write!(f, "{}", pos + 1)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells written as `X`, `O` and `.`/`-`/`_` for empty.
///
/// Whitespace and the separators `/`, `|` and `,` are ignored, so
/// `"XX./OO./..."` and a multi-line grid both work. The board must
/// satisfy the invariants of alternating play.
impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                c if c.is_whitespace() => continue,
                '/' | '|' | ',' => continue,
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(BoardError::InvalidCell(other)),
            };
            cells.push(square);
        }

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardError::WrongCellCount(cells.len()))?;
        let board = Board::try_from(squares)?;

        debug!(empty = board.empty_count(), "Parsed board");
        Ok(board)
    }
}

/// Builds a board that could arise from alternating play.
impl TryFrom<[Square; 9]> for Board {
    type Error = BoardError;

    fn try_from(squares: [Square; 9]) -> Result<Self, Self::Error> {
        let board = Board::from_squares(squares);
        BoardInvariants::check_all(&board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            BoardError::InvariantViolation(descriptions)
        })?;
        Ok(board)
    }
}

impl From<Board> for [Square; 9] {
    fn from(board: Board) -> Self {
        board.squares
    }
}

/// Result of evaluating a board's winning lines.
///
/// Derived from the board on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete.
    Undecided,
    /// The player owns a complete line.
    Wins(Player),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Wins(player) => Some(player),
            Outcome::Undecided => None,
        }
    }
}

/// Current status of a game, distinguishing a draw from play in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::initial();
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.current_player(), Player::X);
        assert_eq!(board.available_actions(), Position::ALL.to_vec());
    }

    #[test]
    fn test_apply_does_not_mutate() {
        let board = Board::initial();
        let next = board.apply(Position::CENTER, Player::X).unwrap();
        assert_eq!(board, Board::initial());
        assert_eq!(next.get(Position::CENTER), Square::Occupied(Player::X));
        assert_eq!(next.current_player(), Player::O);
    }

    #[test]
    fn test_apply_occupied_square() {
        let board = Board::initial()
            .apply_as_current_player(Position::CENTER)
            .unwrap();
        assert_eq!(
            board.apply_as_current_player(Position::CENTER),
            Err(MoveError::SquareOccupied(Position::CENTER))
        );
    }

    #[test]
    fn test_apply_ignores_turn() {
        // Probing the opponent's placement is allowed
        let board = Board::initial().apply(Position::TOP_LEFT, Player::O).unwrap();
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.count(Player::X), 0);
    }

    #[test]
    fn test_display() {
        let board: Board = "X.O/.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|O\n-+-+-\n4|X|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XX?/.../...".parse::<Board>(), Err(BoardError::InvalidCell('?')));
        assert_eq!("XO./...".parse::<Board>(), Err(BoardError::WrongCellCount(6)));
        assert!(matches!(
            "OO./.../...".parse::<Board>(),
            Err(BoardError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_deserialize_checks_invariants() {
        let board: Board = "XO./.X./...".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert!(json.starts_with(r#"[{"Occupied":"X"},{"Occupied":"O"},"Empty""#));
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;

        // O moved first; serializing skips the check, reading it back does not
        let unbalanced = Board::from_squares([o, e, e, e, e, e, e, e, e]);
        let json = serde_json::to_string(&unbalanced).unwrap();
        assert!(serde_json::from_str::<Board>(&json).is_err());

        assert!(matches!(
            Board::try_from([x, x, x, o, o, o, e, e, e]),
            Err(BoardError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_parse_multiline() {
        let board: Board = "X O .\n. X .\n. . .".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.current_player(), Player::O);
    }
}
