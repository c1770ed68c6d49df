//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the move selector and invariants can compose them.

pub mod draw;
pub mod terminal;
pub mod utility;
pub mod win;

pub use draw::{is_draw, is_full};
pub use terminal::{is_terminal, status};
pub use utility::utility;
pub use win::{WINNING_LINES, completed_lines, outcome, winner};
