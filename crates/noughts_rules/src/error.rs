//! Errors raised by the rules engine.

use super::Position;

/// Error that can occur when addressing the board or choosing a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// The requested square lies outside the 3x3 grid.
    #[display("Position ({}, {}) is outside the 3x3 board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// A move was requested on a board with no empty square.
    #[display("No empty square left to play")]
    NoMovesAvailable,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Text could not be read as a board position.
    #[display("Cannot read a position from {:?}", _0)]
    InvalidPosition(String),
}

impl std::error::Error for RulesError {}
