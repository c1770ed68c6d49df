//! Board coordinates for tic-tac-toe moves.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board, addressed by row and column (both 0-2).
///
/// Positions can only be built inside the grid, so every `Position`
/// a caller holds denotes a real cell. Whether that cell is empty is a
/// property of a particular [`Board`](crate::Board) and is checked when
/// a mark is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    col: u8,
}

/// A candidate or chosen move. Same coordinates as [`Position`].
pub type Action = Position;

impl Position {
    /// Top-left (0, 0)
    pub const TOP_LEFT: Position = Position::at(0, 0);
    /// Top-center (0, 1)
    pub const TOP_CENTER: Position = Position::at(0, 1);
    /// Top-right (0, 2)
    pub const TOP_RIGHT: Position = Position::at(0, 2);
    /// Middle-left (1, 0)
    pub const MIDDLE_LEFT: Position = Position::at(1, 0);
    /// Center (1, 1)
    pub const CENTER: Position = Position::at(1, 1);
    /// Middle-right (1, 2)
    pub const MIDDLE_RIGHT: Position = Position::at(1, 2);
    /// Bottom-left (2, 0)
    pub const BOTTOM_LEFT: Position = Position::at(2, 0);
    /// Bottom-center (2, 1)
    pub const BOTTOM_CENTER: Position = Position::at(2, 1);
    /// Bottom-right (2, 2)
    pub const BOTTOM_RIGHT: Position = Position::at(2, 2);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position, rejecting coordinates outside the grid.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` if `row` or `col` is greater than 2.
    #[instrument]
    pub fn new(row: u8, col: u8) -> Result<Self, MoveError> {
        if row > 2 || col > 2 {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Row, 0 at the top.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Converts position to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        usize::from(self.row) * 3 + usize::from(self.col)
    }

    /// Creates position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.to_index()]
    }

    /// Parses human input: a 1-based cell number (1-9), a `row,col`
    /// pair (0-based), or a label such as "top-left".
    #[instrument]
    pub fn parse_input(s: &str) -> Option<Position> {
        let s = s.trim();

        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse::<u8>().ok()?;
            let col = col.trim().parse::<u8>().ok()?;
            return Self::new(row, col).ok();
        }

        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let s_lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = MoveError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}
