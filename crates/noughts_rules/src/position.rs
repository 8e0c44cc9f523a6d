//! Board coordinates.

use super::RulesError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// A square on the board, addressed by row and column (both `0..3`).
///
/// Positions can only be built in bounds, so every `Position` is a valid
/// square. Ordering is row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// The center square.
    pub const CENTER: Position = Position::at(1, 1);

    /// The four corner squares, in row-major order.
    pub const CORNERS: [Position; 4] = [
        Position::at(0, 0),
        Position::at(0, 2),
        Position::at(2, 0),
        Position::at(2, 2),
    ];

    /// All 9 squares in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a position, failing if it falls outside the grid.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, RulesError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(RulesError::OutOfBounds { row, col });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    /// Creates a position from a row-major index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Result<Self, RulesError> {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Converts position to a row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Row of this square.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column of this square.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// True for squares on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True for squares on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row() + self.col() == BOARD_SIZE - 1
    }

    /// True for the four corner squares.
    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parses a keypad digit (`1`-`9`), a `row,col` / `row col` pair, or a label.
impl FromStr for Position {
    type Err = RulesError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || RulesError::InvalidPosition(s.to_string());

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [digit] if digit.chars().all(|c| c.is_ascii_digit()) => {
                let key: usize = digit.parse().map_err(|_| invalid())?;
                match key {
                    1..=9 => Self::from_index(key - 1),
                    _ => Err(invalid()),
                }
            }
            [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
                (Ok(row), Ok(col)) => Self::new(row, col),
                _ => Self::from_label(s).ok_or_else(invalid),
            },
            _ => Self::from_label(s).ok_or_else(invalid),
        }
    }
}

impl Position {
    fn from_label(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = RulesError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row(), pos.col())
    }
}
